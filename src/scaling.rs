//! Keeps ingredient counts proportional to the serving count.

use crate::model::Recipe;
use log::{debug, warn};

/// A one-step serving change requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingDirection {
    Increase,
    Decrease,
}

/// Move the serving count one step and rescale every ingredient count.
///
/// Decreasing at one serving is a no-op. Returns whether the recipe changed.
pub fn rescale(recipe: &mut Recipe, direction: ServingDirection) -> bool {
    let old_servings = recipe.servings;
    let new_servings = match direction {
        ServingDirection::Increase => old_servings.saturating_add(1),
        ServingDirection::Decrease if old_servings > 1 => old_servings - 1,
        ServingDirection::Decrease => {
            debug!("Serving count already at 1, ignoring decrease");
            return false;
        }
    };
    apply(recipe, old_servings, new_servings)
}

/// Jump straight to `target` servings (never below 1).
pub fn rescale_to(recipe: &mut Recipe, target: u32) -> bool {
    let old_servings = recipe.servings;
    apply(recipe, old_servings, target.max(1))
}

/// Every count is computed from the same `old_servings` snapshot, and
/// `servings` is written last.
fn apply(recipe: &mut Recipe, old_servings: u32, new_servings: u32) -> bool {
    if old_servings == new_servings {
        return false;
    }

    let ratio = f64::from(new_servings) / f64::from(old_servings.max(1));
    for record in &mut recipe.ingredients {
        if let Some(count) = record.count.as_mut() {
            let scaled = *count * ratio;
            if scaled.is_finite() {
                *count = scaled;
            } else {
                warn!(
                    "Count {} for {:?} overflows when scaled, keeping it",
                    count, record.ingredient
                );
            }
        }
    }
    recipe.servings = new_servings;

    debug!(
        "Rescaled recipe {} from {} to {} servings",
        recipe.id, old_servings, new_servings
    );
    true
}
