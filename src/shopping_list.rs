use crate::model::{IngredientRecord, Recipe};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Ingredients the user wants to buy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ListItem {
        self.items.push(ListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        });
        &self.items[self.items.len() - 1]
    }

    /// Add every ingredient of `recipe` at its current scale.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> Vec<ListItem> {
        recipe
            .ingredients()
            .iter()
            .map(|IngredientRecord { count, unit, ingredient }| {
                self.add_item(*count, unit.as_str(), ingredient.as_str()).clone()
            })
            .collect()
    }

    pub fn delete_item(&mut self, id: &str) -> Option<ListItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Returns false when no item has this id.
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = Some(count);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
