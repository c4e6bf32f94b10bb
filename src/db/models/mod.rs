//! Domain models
//!
//! Each model maps to one collection:
//!
//! | Model | Collection |
//! |-------|------------|
//! | [`MenuItem`] | `menu_item` |
//! | [`Order`] | `orders` |
//! | [`Review`] | `review` |
//! | [`RewardAccount`] | `reward_account` |
//! | [`RestaurantSettings`] | `restaurant_settings` (singleton) |
//!
//! Record ids are serialized as the string `id` field (`"table:key"`)
//! via [`serde_thing`].

pub mod menu_item;
pub mod order;
pub mod review;
pub mod reward_account;
pub mod serde_thing;
pub mod settings;

pub use menu_item::{Category, MenuItem, MenuItemCreate};
pub use order::{Order, OrderCreate, OrderItem, OrderStatus, PaymentStatus};
pub use review::{Review, ReviewCreate};
pub use reward_account::{RewardAccount, Tier};
pub use settings::{RestaurantSettings, Theme};
