use super::*;

#[test]
fn validation_constructor_formats_message() {
    let err = PreviewError::validation("bad raster");
    assert!(matches!(err, PreviewError::Validation(_)));
    assert_eq!(err.to_string(), "validation error: bad raster");
}

#[test]
fn decode_constructor_formats_message() {
    let err = PreviewError::decode("truncated png");
    assert!(matches!(err, PreviewError::Decode(_)));
    assert_eq!(err.to_string(), "decode error: truncated png");
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let err: PreviewError = anyhow::anyhow!("boom").into();
    assert!(matches!(err, PreviewError::Other(_)));
    assert_eq!(err.to_string(), "boom");
}
