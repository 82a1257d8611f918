pub mod certificate_card;
pub mod footer;
pub mod forms;
pub mod header;
pub mod hours_chart;
pub mod mission_card;
pub mod modal;
pub mod toast_stack;
pub mod user_table;
