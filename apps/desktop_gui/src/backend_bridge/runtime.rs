//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::SignupTransport;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker thread. Commands are processed one at a time; the UI
/// thread never blocks on network I/O.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: Arc<dyn SignupTransport>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Signup { request } => {
                        tracing::info!("backend: signup");
                        let outcome = transport.signup(&request).await;
                        if let Err(err) = &outcome {
                            tracing::error!("backend: signup failed: {err}");
                        }
                        if ui_tx.send(UiEvent::SignupFinished(outcome)).is_err() {
                            tracing::warn!("backend: ui event channel closed; stopping worker");
                            break;
                        }
                    }
                }
            }
            tracing::debug!("backend: command channel closed");
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use async_trait::async_trait;
    use client_core::RequestError;
    use crossbeam_channel::bounded;
    use shared::protocol::{SignupRequest, SignupResponse};

    struct StaticTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SignupTransport for StaticTransport {
        async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, RequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.password == "bad" {
                return Err(RequestError::HttpStatus {
                    status: 400,
                    detail: None,
                });
            }
            Ok(SignupResponse(serde_json::json!({ "ok": true })))
        }
    }

    fn request(password: &str) -> SignupRequest {
        SignupRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn worker_reports_each_signup_outcome() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let transport = Arc::new(StaticTransport {
            calls: AtomicUsize::new(0),
        });
        let handle = launch(cmd_rx, ui_tx, transport.clone());

        cmd_tx
            .send(BackendCommand::Signup {
                request: request("good"),
            })
            .expect("queue");
        cmd_tx
            .send(BackendCommand::Signup {
                request: request("bad"),
            })
            .expect("queue");
        drop(cmd_tx);

        let mut outcomes = Vec::new();
        while outcomes.len() < 2 {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ui event") {
                UiEvent::SignupFinished(outcome) => outcomes.push(outcome),
                UiEvent::Info(_) => {}
                UiEvent::WorkerFailed(message) => panic!("unexpected failure: {message}"),
            }
        }
        handle.join().expect("worker exits");

        assert!(outcomes[0].is_ok());
        assert!(matches!(
            outcomes[1],
            Err(RequestError::HttpStatus { status: 400, .. })
        ));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }
}
