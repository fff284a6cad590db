//! UI Components
//!
//! Pages and widgets, organized one component family per file.

mod author_list;
mod category_manager;
mod contact_form;
mod creator_dashboard;
mod gallery;
mod item_card;
mod item_form;
mod login_form;
mod nav_bar;
mod nft_import;
mod settings_form;
mod share_view;
mod toast_host;

pub use author_list::AuthorList;
pub use category_manager::CategoryManager;
pub use contact_form::ContactForm;
pub use creator_dashboard::CreatorDashboard;
pub use gallery::{Gallery, GalleryScope};
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use nft_import::NftImport;
pub use settings_form::SettingsForm;
pub use share_view::ShareViewPage;
pub use toast_host::ToastHost;
