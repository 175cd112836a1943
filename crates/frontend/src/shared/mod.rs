pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod export;
pub mod icons;
