pub mod glass_card;
pub mod loading;
