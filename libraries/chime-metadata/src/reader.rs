/// Tag and duration reading over in-memory payloads using lofty
use crate::error::Result;
use lofty::{AudioFile, TaggedFileExt};
use std::io::Cursor;

/// Title/artist pair recovered from embedded tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TagFields {
    pub title: Option<String>,
    pub artist: Option<String>,
}

/// Parse embedded tags out of a raw payload.
///
/// A payload with no tag block at all yields empty fields, not an error;
/// errors here mean the payload could not be probed as audio in the first
/// place.
pub(crate) fn read_tags(payload: &[u8]) -> Result<TagFields> {
    let tagged_file = lofty::Probe::new(Cursor::new(payload))
        .guess_file_type()?
        .read()?;

    // Prefer the primary tag, fall back to whichever tag block exists
    let Some(tag) = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.tags().first())
    else {
        return Ok(TagFields::default());
    };

    let mut fields = TagFields::default();
    for item in tag.items() {
        match item.key() {
            lofty::ItemKey::TrackTitle => {
                fields.title = item
                    .value()
                    .text()
                    .map(str::to_string)
                    .filter(|title| !title.is_empty());
            }
            lofty::ItemKey::TrackArtist => {
                fields.artist = item
                    .value()
                    .text()
                    .map(str::to_string)
                    .filter(|artist| !artist.is_empty());
            }
            _ => {}
        }
    }

    Ok(fields)
}

/// Read the payload's reported duration in seconds
pub(crate) fn read_duration(payload: &[u8]) -> Result<f64> {
    let tagged_file = lofty::Probe::new(Cursor::new(payload))
        .guess_file_type()?
        .read()?;

    Ok(tagged_file.properties().duration().as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_payload_fails_to_probe() {
        assert!(read_tags(b"not an audio container").is_err());
        assert!(read_duration(b"not an audio container").is_err());
    }

    #[test]
    fn empty_payload_fails_to_probe() {
        assert!(read_tags(&[]).is_err());
    }
}
