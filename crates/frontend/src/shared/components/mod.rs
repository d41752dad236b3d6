pub mod page_header;
pub mod tab_button;
pub mod tab_image;

pub use page_header::PageHeader;
pub use tab_button::TabButton;
pub use tab_image::TabImage;
