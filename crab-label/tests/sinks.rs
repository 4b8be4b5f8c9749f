// crab-label/tests/sinks.rs
// File and network output

use std::time::Duration;

use crab_label::{
    BarcodeRequest, CommandLanguage, FileSink, LabelError, LabelGeometry, LabelSink,
    NetworkPrinter, Symbology, render_labels,
};
use tempfile::TempDir;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

fn job(language: CommandLanguage) -> crab_label::PrintJob {
    let request = BarcodeRequest::new("SKU 0042/A", Symbology::Code128).unwrap();
    render_labels(&request, &LabelGeometry::default().with_quantity(2), language).unwrap()
}

#[tokio::test]
async fn test_file_sink_writes_job() {
    let temp_dir = TempDir::new().unwrap();
    let sink = FileSink::new(temp_dir.path().join("out"));

    let job = job(CommandLanguage::Zpl);
    let path = sink.write(&job).await.unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "barcode-labels-SKU-0042-A.zpl"
    );
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, job.as_bytes());
}

#[tokio::test]
async fn test_file_sink_binary() {
    let temp_dir = TempDir::new().unwrap();
    let sink = FileSink::new(temp_dir.path());

    let job = job(CommandLanguage::EscPos);
    sink.send(&job).await.unwrap();

    let written = tokio::fs::read(temp_dir.path().join("barcode-labels-SKU-0042-A.bin"))
        .await
        .unwrap();
    assert_eq!(written, job.as_bytes());
}

#[tokio::test]
async fn test_network_printer_receives_bytes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let job = job(CommandLanguage::Epl);
    let printer = NetworkPrinter::from_addr(&addr.to_string())
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    printer.send(&job).await.unwrap();

    let received = server.await.unwrap();
    assert_eq!(received, job.as_bytes());
}

#[tokio::test]
async fn test_network_printer_offline() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let printer = NetworkPrinter::from_addr(&addr.to_string()).unwrap();
    assert!(!printer.is_online().await);

    let result = printer.print(b"^XA^XZ").await;
    assert!(matches!(
        result,
        Err(LabelError::Connection(_)) | Err(LabelError::Timeout(_))
    ));
}
