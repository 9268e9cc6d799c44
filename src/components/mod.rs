pub mod add_custom_criteria;
pub mod candidates_list;
pub mod criteria_review_form;
pub mod dialog;
pub mod edit_criteria_dialog;
pub mod review_modal;
pub mod reviews_list;
pub mod star_rating;
