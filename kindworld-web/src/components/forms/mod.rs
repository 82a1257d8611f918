mod activity;
mod certificate;
mod fields;
mod user;

pub use activity::{ActivityForm, ActivityFormProps};
pub use certificate::{CertificateForm, CertificateFormProps};
pub use fields::{
    SelectField, SelectFieldProps, SelectOption, TextAreaField, TextAreaFieldProps, TextField,
    TextFieldProps,
};
pub use user::{UserForm, UserFormProps};
