use shop_events::{Event, EventHandler, HandlerError, Narrow};

use crate::events::{ProductCreated, ProductEvent};

/// Notifies catalog subscribers that a product was created.
///
/// There is no mail transport in this workspace; the notification is logged.
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreated;

impl SendEmailWhenProductIsCreated {
    pub fn render(&self, created: &ProductCreated) -> String {
        format!(
            "Sending email to catalog subscribers: product {} created",
            created.name
        )
    }
}

impl<E> EventHandler<E> for SendEmailWhenProductIsCreated
where
    E: Event + Narrow<ProductEvent>,
{
    fn handle(&self, event: &E) -> anyhow::Result<()> {
        let Some(ProductEvent::Created(created)) = <E as Narrow<ProductEvent>>::narrow(event)
        else {
            return Err(HandlerError::unexpected("SendEmailWhenProductIsCreated", event).into());
        };

        tracing::info!(
            product = %created.event_data().name,
            price = created.event_data().price,
            "{}",
            self.render(created.event_data())
        );
        Ok(())
    }
}
