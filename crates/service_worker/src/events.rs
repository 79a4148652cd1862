//! Platform event conversion and the exports called by `sw.js`.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Promise, Reflect};
use leptos::logging;
use notification_worker::{NotificationWorker, WorkerEvent, WorkerEventKind};
use platform_host::ReplyPort;
use platform_host_web::{js_error_to_string, WebDisplayedNotification, WebReplyPort};
use serde_json::Value;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::future_to_promise;
use web_sys::{
    ErrorEvent, Event, ExtendableMessageEvent, MessagePort, NotificationEvent,
    PromiseRejectionEvent, PushEvent,
};

thread_local! {
    static WORKER: RefCell<Option<NotificationWorker>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let services =
        platform_host_web::build_worker_services().map_err(|err| JsValue::from_str(&err))?;
    let worker = NotificationWorker::new(services, crate::worker_config());
    logging::log!(
        "notification worker ready: cache {} on {} host",
        worker.config().cache_version,
        platform_host_web::host_strategy_name()
    );
    WORKER.with(|slot| *slot.borrow_mut() = Some(worker));
    Ok(())
}

/// Handles one platform event; `sw.js` passes the returned promise to `waitUntil`.
#[wasm_bindgen(js_name = handleEvent)]
pub fn handle_event(event: Event) -> Promise {
    let Some(worker) = WORKER.with(|slot| slot.borrow().clone()) else {
        return Promise::reject(&JsValue::from_str("notification worker is not started"));
    };
    let event_type = event.type_();
    let Some(kind) =
        WorkerEventKind::from_name(&event_type).filter(|kind| worker.listens_to(*kind))
    else {
        logging::warn!("ignoring unexpected `{event_type}` event");
        return Promise::resolve(&JsValue::UNDEFINED);
    };
    let worker_event = match to_worker_event(kind, &event) {
        Ok(worker_event) => worker_event,
        Err(err) => {
            logging::error!("malformed `{event_type}` event: {err}");
            return Promise::reject(&JsValue::from_str(&err));
        }
    };

    let handled = worker_event.kind();
    future_to_promise(async move {
        worker
            .handle(worker_event)
            .await
            .map(|()| JsValue::UNDEFINED)
            .map_err(|err| {
                logging::error!("`{}` handler failed: {err}", handled.name());
                JsValue::from_str(&err.to_string())
            })
    })
}

/// Logs a global `error` or `unhandledrejection` event.
#[wasm_bindgen(js_name = reportGlobalError)]
pub fn report_global_error(event: Event) {
    if let Some(error) = event.dyn_ref::<ErrorEvent>() {
        logging::error!("worker error: {}", error.message());
    } else if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
        logging::error!(
            "unhandled rejection: {}",
            js_error_to_string(rejection.reason())
        );
    } else {
        logging::error!("worker `{}` event", event.type_());
    }
}

fn to_worker_event(kind: WorkerEventKind, event: &Event) -> Result<WorkerEvent, String> {
    let mismatch = || format!("event is not a `{}` event", kind.name());
    Ok(match kind {
        WorkerEventKind::Install => WorkerEvent::Install,
        WorkerEventKind::Activate => WorkerEvent::Activate,
        WorkerEventKind::Push => {
            let push = event.dyn_ref::<PushEvent>().ok_or_else(mismatch)?;
            WorkerEvent::Push {
                payload: push.data().map(|data| data.text()),
            }
        }
        WorkerEventKind::NotificationClick => {
            let click = event.dyn_ref::<NotificationEvent>().ok_or_else(mismatch)?;
            WorkerEvent::NotificationClick {
                notification: Rc::new(WebDisplayedNotification::new(click.notification())),
                action: string_field(event, "action").filter(|action| !action.is_empty()),
            }
        }
        WorkerEventKind::NotificationClose => {
            let close = event.dyn_ref::<NotificationEvent>().ok_or_else(mismatch)?;
            WorkerEvent::NotificationClose {
                notification: Rc::new(WebDisplayedNotification::new(close.notification())),
            }
        }
        WorkerEventKind::Sync => WorkerEvent::Sync {
            tag: string_field(event, "tag").unwrap_or_default(),
        },
        WorkerEventKind::PeriodicSync => WorkerEvent::PeriodicSync {
            tag: string_field(event, "tag").unwrap_or_default(),
        },
        WorkerEventKind::Message => {
            let message = event
                .dyn_ref::<ExtendableMessageEvent>()
                .ok_or_else(mismatch)?;
            let data = serde_wasm_bindgen::from_value::<Value>(message.data()).unwrap_or(Value::Null);
            let reply = message
                .ports()
                .get(0)
                .dyn_into::<MessagePort>()
                .ok()
                .map(|port| Rc::new(WebReplyPort::new(port)) as Rc<dyn ReplyPort>);
            WorkerEvent::Message { data, reply }
        }
    })
}

fn string_field(event: &Event, name: &str) -> Option<String> {
    Reflect::get(event, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}
