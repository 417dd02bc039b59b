use std::sync::Arc;

use futures::{FutureExt, StreamExt};
use rental_keymap::{
    conversion,
    message::{KeySequence, KeymapMessage, Mode},
    MessageResolver,
};
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver},
        oneshot, Mutex,
    },
};

use crate::error::AppError;

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub sequence: KeySequence,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    App,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Resize(u16, u16),
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    pub receiver: Receiver<Envelope>,
    resolver: Arc<Mutex<MessageResolver>>,
    sender: mpsc::Sender<Envelope>,
}

impl Emitter {
    pub fn start() -> Self {
        let (sender, receiver) = mpsc::channel(16);
        let resolver = Arc::new(Mutex::new(MessageResolver::default()));

        let (cancellation, cancellation_receiver) = oneshot::channel();
        start_crossterm_listener(cancellation_receiver, resolver.clone(), sender.clone());

        Self {
            cancellation: Some(cancellation),
            receiver,
            resolver,
            sender,
        }
    }

    pub async fn emit(&self, messages: Vec<Message>) -> Result<(), AppError> {
        self.sender
            .send(Envelope {
                messages,
                sequence: KeySequence::None,
                source: MessageSource::App,
            })
            .await?;

        Ok(())
    }

    pub async fn set_current_mode(&mut self, mode: Mode) {
        let mut resolver = self.resolver.lock().await;
        resolver.mode = mode;
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        if let Some(cancellation) = self.cancellation.take() {
            let (sender, receiver) = oneshot::channel();
            if cancellation.send(sender).is_err() {
                tracing::warn!("input listener already stopped");
                return Ok(());
            }

            receiver.await?;
        }

        Ok(())
    }
}

fn start_crossterm_listener(
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    resolver_mutex: Arc<Mutex<MessageResolver>>,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                cancellation = &mut cancellation_receiver => {
                    if let Ok(sender) = cancellation {
                        if sender.send(true).is_err() {
                            tracing::error!("sending cancellation confirmation failed");
                        }
                    }
                    break
                }
                event = crossterm_event => match event {
                    Some(Ok(event)) => {
                        if let Some(envelope) = handle_crossterm_event(&resolver_mutex, event).await {
                            if sender.send(envelope).await.is_err() {
                                tracing::debug!("message receiver closed, stopping input listener");
                                break;
                            }
                        }
                    }
                    Some(Err(error)) => tracing::error!("reading terminal event failed: {:?}", error),
                    None => break,
                },
            }
        }
    });
}

async fn handle_crossterm_event(
    resolver_mutex: &Arc<Mutex<MessageResolver>>,
    event: crossterm::event::Event,
) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            let key = conversion::to_key(&key)?;

            let mut resolver = resolver_mutex.lock().await;
            let (messages, sequence) = resolver.add_key(key);

            Some(Envelope {
                messages: messages.into_iter().map(Message::Keymap).collect(),
                sequence,
                source: MessageSource::User,
            })
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            sequence: KeySequence::None,
            source: MessageSource::User,
        }),
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_)
        | crossterm::event::Event::Mouse(_) => None,
    }
}
