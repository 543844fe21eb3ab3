use crate::commands::{CmdMessage, CmdResult};
use crate::draft::DraftSession;
use crate::error::Result;
use crate::image::{self, ImageSource};
use crate::status::{StatusChannel, StatusMessage};

/// Encodes the picked image and attaches it to the draft it was picked for.
///
/// On an encoding failure the draft keeps whatever image it had, the error is
/// published on the status channel, and the error is returned so the caller can
/// carry on with a text-only post.
pub async fn run(
    session: &DraftSession,
    status: &StatusChannel,
    source: &ImageSource,
) -> Result<CmdResult> {
    let token = session.token();

    let payload = match image::encode(source).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(%err, "image not attached");
            status.publish(StatusMessage::error(format!("Error reading image: {}", err)));
            return Err(err.into());
        }
    };

    let mut result = CmdResult::default();
    let attached = payload.is_some();
    if !session.apply_image(token, payload) {
        result.add_message(CmdMessage::warning(
            "Image discarded: the form was cleared while it was loading",
        ));
    } else if attached {
        result.add_message(CmdMessage::info("Image attached"));
    } else {
        result.add_message(CmdMessage::info("Image removed"));
    }
    Ok(result)
}
