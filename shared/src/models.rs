//! Data models for the Recipe Book application

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub steps: String,
}

impl Recipe {
    /// Ingredients and steps of this recipe
    pub fn details(&self) -> RecipeDetails {
        RecipeDetails {
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
        }
    }
}

/// Input for creating a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
}

impl NewRecipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
        }
    }
}

/// Partial update of a recipe
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
}

impl RecipeChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none() && self.steps.is_none()
    }

    /// Apply the changes to a recipe, keeping fields that are not set
    pub fn apply_to(&self, recipe: &mut Recipe) {
        if let Some(name) = &self.name {
            recipe.name = name.clone();
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(steps) = &self.steps {
            recipe.steps = steps.clone();
        }
    }
}

/// The viewable part of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    pub ingredients: String,
    pub steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> Recipe {
        Recipe {
            id: 1,
            name: "Soup".to_string(),
            ingredients: "water,salt".to_string(),
            steps: "boil water. add salt.".to_string(),
        }
    }

    #[test]
    fn test_apply_single_field_keeps_others() {
        let mut recipe = soup();
        let changes = RecipeChanges {
            steps: Some("boil water. add salt. serve.".to_string()),
            ..Default::default()
        };

        changes.apply_to(&mut recipe);

        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.ingredients, "water,salt");
        assert_eq!(recipe.steps, "boil water. add salt. serve.");
    }

    #[test]
    fn test_empty_changes_leave_recipe_untouched() {
        let mut recipe = soup();
        let changes = RecipeChanges::default();
        assert!(changes.is_empty());

        changes.apply_to(&mut recipe);
        assert_eq!(recipe, soup());
    }

    #[test]
    fn test_details() {
        let details = soup().details();
        assert_eq!(details.ingredients, "water,salt");
        assert_eq!(details.steps, "boil water. add salt.");
    }
}
