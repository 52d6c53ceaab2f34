pub mod anchor;
pub mod mapillary;

// Re-export commonly used items
pub use anchor::anchor_text;
pub use mapillary::mapillary_img_id;
