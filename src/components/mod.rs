//! UI Components
//!
//! Reusable Leptos components.

mod header_bar;
mod search_box;
mod filter_bar;
mod novel_card;
mod browse_page;
mod novel_detail;
mod star_rating;
mod review_section;
mod review_form;
mod comment_section;
mod thread_list;
mod notification_panel;
mod profile_panel;
mod auth_page;
mod toast_stack;
mod delete_confirm_button;

pub use header_bar::HeaderBar;
pub use search_box::SearchBox;
pub use filter_bar::{FilterBar, build_filter};
pub use novel_card::NovelCard;
pub use browse_page::BrowsePage;
pub use novel_detail::NovelDetail;
pub use star_rating::{StarRating, StarInput};
pub use review_section::ReviewSection;
pub use review_form::ReviewForm;
pub use comment_section::CommentSection;
pub use thread_list::ThreadList;
pub use notification_panel::NotificationPanel;
pub use profile_panel::ProfilePanel;
pub use auth_page::AuthPage;
pub use toast_stack::ToastStack;
pub use delete_confirm_button::DeleteConfirmButton;
