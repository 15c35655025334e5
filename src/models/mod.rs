mod favourites;
mod profile;
mod recipe;

pub use favourites::Favourites;
pub use profile::UserProfile;
pub use recipe::{Recipe, RecipeId};
