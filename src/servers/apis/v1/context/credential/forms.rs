use serde::{Deserialize, Serialize};

/// Form to create a new credential. The key is always generated by the
/// service; only the label is accepted from the caller.
#[derive(Serialize, Deserialize, Debug)]
pub struct AddCredentialForm {
    pub name: Option<String>,
}
