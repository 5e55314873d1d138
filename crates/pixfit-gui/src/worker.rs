use pixfit_core::{Conversion, ConversionConfig, Converter, QualityPreset, SizeConstraint};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// One file queued for conversion, with the settings read at submit time
pub struct ConversionRequest {
    pub path: PathBuf,
    pub config: ConversionConfig,
    pub constraint: SizeConstraint,
    pub preset: QualityPreset,
}

/// Outcome reported back to the UI thread
pub enum ConversionEvent {
    Finished(Box<Conversion>),
    Failed { name: String, message: String },
}

/// Background conversion worker fed over a channel.
///
/// A single worker with a FIFO queue keeps results in submit order and
/// gives every pipeline run its own buffers.
pub struct ConversionWorker {
    request_tx: Sender<ConversionRequest>,
    event_rx: Receiver<ConversionEvent>,
    _worker: JoinHandle<()>,
    in_flight: usize,
}

impl ConversionWorker {
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<ConversionRequest>();
        let (event_tx, event_rx) = channel::<ConversionEvent>();

        let worker = thread::spawn(move || {
            Self::worker_loop(request_rx, event_tx);
        });

        Self {
            request_tx,
            event_rx,
            _worker: worker,
            in_flight: 0,
        }
    }

    fn worker_loop(request_rx: Receiver<ConversionRequest>, event_tx: Sender<ConversionEvent>) {
        while let Ok(request) = request_rx.recv() {
            let name = request
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image")
                .to_string();

            let converter = Converter::new(request.config);
            let event = match converter.convert(&request.path, &request.constraint, request.preset)
            {
                Ok(conversion) => ConversionEvent::Finished(Box::new(conversion)),
                Err(e) => {
                    tracing::warn!("Conversion of {name} failed: {e}");
                    ConversionEvent::Failed {
                        name,
                        message: e.to_string(),
                    }
                }
            };

            if event_tx.send(event).is_err() {
                break;
            }
        }
    }

    /// Queue one file for conversion
    pub fn submit(&mut self, request: ConversionRequest) {
        self.in_flight += 1;
        let _ = self.request_tx.send(request);
    }

    /// Drain completed conversions without blocking
    pub fn poll_events(&mut self) -> Vec<ConversionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            events.push(event);
        }
        events
    }

    /// Number of submitted files still being processed
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl Default for ConversionWorker {
    fn default() -> Self {
        Self::new()
    }
}
