pub mod nav;
pub mod chat_panel;
pub mod confidence_meter;
pub mod factor_breakdown;
pub mod feedback;
pub mod footer;
pub mod game_card;
pub mod popular_matches;
pub mod reason_item;
pub mod result_form;
pub mod verification_badge;
