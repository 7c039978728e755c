pub(crate) mod confirm_modal;
pub(crate) mod event_card;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod message_banner;
