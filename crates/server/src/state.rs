use crate::pipeline::SignalPipeline;

pub struct AppState {
    pub pipeline: SignalPipeline,
}
