use super::*;

/// Tests loading a stored file.
///
/// Expected: Ok(Some) with the stored bytes
#[tokio::test]
async fn loads_stored_file() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());
    let file_name = repo.store(b"gif-bytes").await?;

    let bytes = repo.load(&file_name).await?;

    assert_eq!(bytes.as_deref(), Some(&b"gif-bytes"[..]));

    Ok(())
}

/// Tests loading a file that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_file() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());

    assert!(repo.load("abcdefgh.ijk").await?.is_none());

    Ok(())
}

/// Tests loading with a name that points outside the image directory.
///
/// Expected: Err with ErrorKind::InvalidInput
#[tokio::test]
async fn rejects_path_traversal() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());

    for name in ["../secret.txt", "sub/abcdefgh.ijk", "..", ""] {
        let result = repo.load(name).await;
        assert_eq!(
            result.map_err(|e| e.kind()).err(),
            Some(ErrorKind::InvalidInput),
            "{name}"
        );
    }

    Ok(())
}
