pub mod rating;
pub mod recommendation;
pub mod title;
pub mod user;

pub use rating::{Rating, MAX_STARS, MIN_STARS};
pub use recommendation::{HomeRecommendation, RelatedRecommendation};
pub use title::{Title, TitleSummary};
pub use user::UserProfile;
