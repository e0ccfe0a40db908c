use super::*;

/// Tests storing an image file.
///
/// Verifies that the file lands in the image directory under a random
/// `xxxxxxxx.xxx` name with the given content.
///
/// Expected: Ok with generated file name
#[tokio::test]
async fn stores_file_under_random_name() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());

    let file_name = repo.store(b"png-bytes").await?;

    let (stem, extension) = file_name.split_once('.').unwrap();
    assert_eq!(stem.len(), 8);
    assert_eq!(extension.len(), 3);
    assert!(file_name
        .chars()
        .all(|c| c == '.' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    assert_eq!(std::fs::read(dir.path().join(&file_name))?, b"png-bytes");

    Ok(())
}

/// Tests storing into a directory that does not exist yet.
///
/// Expected: Ok with the directory created
#[tokio::test]
async fn creates_missing_directory() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let image_dir = dir.path().join("wwwroot").join("images");
    let repo = ImageFileRepository::new(&image_dir);

    let file_name = repo.store(b"jpeg-bytes").await?;

    assert!(image_dir.join(file_name).is_file());

    Ok(())
}

/// Tests storing the same content twice.
///
/// Expected: Ok with two distinct file names
#[tokio::test]
async fn never_reuses_file_names() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());

    let first = repo.store(b"same").await?;
    let second = repo.store(b"same").await?;

    assert_ne!(first, second);

    Ok(())
}
