/// A plain confirmation returned by endpoints which have nothing else to say.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageV1 {
    pub message: String,
}

json_responder!(MessageV1);

impl MessageV1 {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}
