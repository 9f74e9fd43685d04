use crate::app::App;
use crate::app::AppSnapshot;
use crate::messages::app::AppEvent;
use tokio::sync::mpsc;

#[derive(Default)]
pub struct CoreEffects {
    pub(super) actions: Vec<CoreEffect>,
}

#[derive(Debug)]
pub enum CoreEffect {
    EmitState(Box<AppSnapshot>),
    Dismiss,
}

impl CoreEffects {
    pub fn emit_state(&mut self, app: &App) {
        self.actions
            .push(CoreEffect::EmitState(Box::new(AppSnapshot::from_app(app))));
    }

    pub fn dismiss(&mut self) {
        self.actions.push(CoreEffect::Dismiss);
    }
}

pub struct CoreDispatch<'a> {
    pub(super) tx_evt: &'a mpsc::Sender<AppEvent>,
}

pub async fn run_effects(effects: CoreEffects, dispatch: &CoreDispatch<'_>) {
    for effect in effects.actions {
        match effect {
            CoreEffect::EmitState(app) => {
                if let Err(e) = dispatch.tx_evt.send(AppEvent::State(app)).await {
                    tracing::warn!(err = %e, "UI 通道已关闭：State 发送失败");
                }
            }
            CoreEffect::Dismiss => {
                if let Err(e) = dispatch.tx_evt.send(AppEvent::Dismiss).await {
                    tracing::warn!(err = %e, "UI 通道已关闭：Dismiss 发送失败");
                }
            }
        }
    }
}
