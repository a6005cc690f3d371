//! HTTP fetch tests against a mock server.
//!
//! The fetch path is blocking, so each test mounts a wiremock server on
//! the tokio test runtime and drives the client from `spawn_blocking`.

use image::{DynamicImage, Rgb, RgbImage};
use textpix::fetch::{self, FetchError, ImageSource};
use textpix::render::{ConvertError, Converter, GlyphPalette, SizeLimits};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// PNG bytes of a uniform single-level image.
fn png_bytes(width: u32, height: u32, level: u8) -> Vec<u8> {
    let image =
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([level, level, level])));
    let mut bytes = Vec::new();
    image
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("png encoding failed");
    bytes
}

/// Run the blocking loader off the async test runtime.
async fn load_blocking(source: ImageSource) -> Result<Vec<u8>, FetchError> {
    tokio::task::spawn_blocking(move || fetch::load(&source))
        .await
        .expect("fetch task panicked")
}

#[tokio::test]
async fn test_fetch_png_over_http() {
    let server = MockServer::start().await;
    let body = png_bytes(2, 2, 128);
    Mock::given(method("GET"))
        .and(path("/cat.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body.clone())
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let source = ImageSource::parse(&format!("{}/cat.png", server.uri()));
    let bytes = load_blocking(source).await.unwrap();
    assert_eq!(bytes, body);
}

#[tokio::test]
async fn test_convert_source_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dark.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(png_bytes(1, 1, 0))
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let source = ImageSource::parse(&format!("{}/dark.png", server.uri()));
    let text = tokio::task::spawn_blocking(move || {
        let converter = Converter::new(
            SizeLimits::none(),
            GlyphPalette::new(vec!['A', 'B'], 128).unwrap(),
        );
        converter.convert_source(&source)
    })
    .await
    .expect("convert task panicked")
    .unwrap();
    assert_eq!(text, "AA\n");
}

#[tokio::test]
async fn test_http_404_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.png", server.uri());
    let source = ImageSource::parse(&url);
    match load_blocking(source).await {
        Err(FetchError::Status { url: err_url, status }) => {
            assert_eq!(err_url, url);
            assert_eq!(status, 404);
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = ImageSource::parse(&format!("{}/broken.png", server.uri()));
    match load_blocking(source).await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_an_http_error() {
    // Port 1 is never listening locally
    let source = ImageSource::parse("http://127.0.0.1:1/cat.png");
    match load_blocking(source).await {
        Err(FetchError::Http { url, .. }) => {
            assert_eq!(url, "http://127.0.0.1:1/cat.png");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_image_body_fails_at_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>not an image</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let source = ImageSource::parse(&format!("{}/page.html", server.uri()));
    let result = tokio::task::spawn_blocking(move || {
        Converter::default().convert_source(&source)
    })
    .await
    .expect("convert task panicked");
    assert!(matches!(result, Err(ConvertError::Decode(_))));
}
