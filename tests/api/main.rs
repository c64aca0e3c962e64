mod contact_form;
mod helpers;
