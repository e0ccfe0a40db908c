use thiserror::Error;

/// Internal issues indicating inconsistent state between database and file store
#[derive(Error, Debug)]
pub enum InternalError {
    /// An image record exists but its file is gone from the image directory.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Image file '{file_name}' referenced by image {image_id} is missing from disk")]
    ImageFileMissing {
        /// Name of the file inside the image directory
        file_name: String,
        /// Id of the image record pointing at the file
        image_id: uuid::Uuid,
    },
}
