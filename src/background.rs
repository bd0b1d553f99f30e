use crate::print::PrintFacility;
use crate::render::RenderedDocument;
use crate::{Error, Result};
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Print(RenderedDocument),
    Flush(oneshot::Sender<()>),
    Close(oneshot::Sender<()>),
}

/// A print facility that hands requests to a dedicated worker thread.
///
/// The worker owns the wrapped facility and processes requests in order, so
/// `request_print` returns as soon as the document is queued. Slow backends
/// (PDF generation, spooling) never hold up the caller.
pub struct BackgroundPrinter {
    cmd_tx: Mutex<Sender<Command>>,
}

impl BackgroundPrinter {
    /// Spawn the worker thread that owns `inner`.
    pub fn spawn<P: PrintFacility + 'static>(inner: P) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Print(document) => inner.request_print(&document),
                    Command::Flush(resp) => {
                        let _ = resp.send(());
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(());
                        break;
                    }
                }
            }
            log::debug!("Background printer worker stopped");
        });

        Self {
            cmd_tx: Mutex::new(cmd_tx),
        }
    }

    fn send(&self, cmd: Command) -> Result<()> {
        let tx = self
            .cmd_tx
            .lock()
            .map_err(|e| Error::Other(format!("Printer queue poisoned: {}", e)))?;
        tx.send(cmd)
            .map_err(|_| Error::PrintError("Background printer has shut down".into()))
    }

    /// Wait until every request queued before this call has been handed to
    /// the wrapped facility.
    pub async fn flush(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Flush(tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Flush canceled: {}", e)))
    }

    /// Drain queued requests and stop the worker thread.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Close(tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))
    }
}

impl PrintFacility for BackgroundPrinter {
    fn request_print(&self, document: &RenderedDocument) {
        if let Err(e) = self.send(Command::Print(document.clone())) {
            log::warn!("Dropping print request: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::RecordingPrinter;
    use crate::render::RenderMode;

    fn doc(n: usize) -> RenderedDocument {
        RenderedDocument {
            mode: RenderMode::Print,
            html: format!("<p>{}</p>", n),
        }
    }

    #[tokio::test]
    async fn requests_reach_inner_facility_in_order() {
        let rec = RecordingPrinter::new();
        let printer = BackgroundPrinter::spawn(rec.clone());
        for n in 0..5 {
            printer.request_print(&doc(n));
        }
        printer.flush().await.unwrap();
        let got: Vec<String> = rec.requests().into_iter().map(|d| d.html).collect();
        assert_eq!(got.len(), 5);
        assert_eq!(got[0], "<p>0</p>");
        assert_eq!(got[4], "<p>4</p>");
        printer.close().await.unwrap();
    }

    #[tokio::test]
    async fn close_drains_pending_requests() {
        let rec = RecordingPrinter::new();
        let printer = BackgroundPrinter::spawn(rec.clone());
        printer.request_print(&doc(1));
        printer.close().await.unwrap();
        assert_eq!(rec.count(), 1);
    }
}
