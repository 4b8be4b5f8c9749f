//! Raw network printer output
//!
//! ZPL, EPL and ESC/POS printers all accept a raw command stream on a TCP
//! port (9100 by convention), so one adapter covers every language.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

use crate::error::{LabelError, LabelResult};
use crate::repeater::PrintJob;
use crate::sink::LabelSink;

/// Default raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// Network printer (raw TCP)
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer from host and port
    pub fn new(host: &str, port: u16) -> LabelResult<Self> {
        Self::from_addr(&format!("{}:{}", host, port))
    }

    /// Create from a socket address string (e.g., "192.168.1.100:9100").
    ///
    /// A bare IP address gets the default port.
    pub fn from_addr(addr: &str) -> LabelResult<Self> {
        let addr: SocketAddr = addr
            .parse()
            .or_else(|_| {
                addr.parse::<std::net::IpAddr>()
                    .map(|ip| SocketAddr::new(ip, DEFAULT_PORT))
            })
            .map_err(|_| LabelError::InvalidConfig(format!("Invalid address: {}", addr)))?;

        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send raw command bytes to the printer
    #[instrument(skip(self, data), fields(addr = %self.addr, data_len = data.len()))]
    pub async fn print(&self, data: &[u8]) -> LabelResult<()> {
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| LabelError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| LabelError::Connection(format!("{}: {}", self.addr, e)))?;

        info!("Connected, sending {} bytes", data.len());

        stream.write_all(data).await.map_err(|e| {
            LabelError::Io(std::io::Error::new(
                e.kind(),
                format!("Write failed: {}", e),
            ))
        })?;

        stream.flush().await?;
        stream.shutdown().await?;

        info!("Print job sent successfully");
        Ok(())
    }

    /// Check if the printer accepts connections
    #[instrument(skip(self), fields(addr = %self.addr))]
    pub async fn is_online(&self) -> bool {
        let check_timeout = Duration::from_millis(500);

        match tokio::time::timeout(check_timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}

impl LabelSink for NetworkPrinter {
    async fn send(&self, job: &PrintJob) -> LabelResult<()> {
        self.print(job.as_bytes()).await
    }
}
