pub mod card;
pub mod gauge_bar;
pub mod help_modal;
pub mod loading;
pub mod status_bar;
