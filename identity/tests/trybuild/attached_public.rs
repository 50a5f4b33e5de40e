//! An attached identifier on a public struct with extra derives.

use identity::uuid::Uuid;
use identity::Identifier;

mod media {
    use identity::identifier;
    use identity::uuid::Uuid;

    #[identifier(Uuid)]
    #[derive(PartialOrd, Ord)]
    pub struct ImageID;
}

fn main() {
    let image = media::ImageID::new(Uuid::nil());
    let raw: Uuid = image.raw_value;
    let _: media::ImageID = raw.into();
    let _ = media::ImageID::unique() > image;
}
