use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::ANALYSER_FFT_SIZE;

/// Microphone input: a `getUserMedia` stream feeding an analyser whose
/// time-domain buffer is reduced to an RMS level on demand.
pub struct Microphone {
    audio_ctx: web::AudioContext,
    analyser: RefCell<Option<web::AnalyserNode>>,
    buf: RefCell<Vec<f32>>,
}

impl Microphone {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            audio_ctx,
            analyser: RefCell::new(None),
            buf: RefCell::new(Vec::new()),
        })
    }

    /// Ask for the microphone and route it into an analyser. Until this
    /// resolves the level reads 0.
    pub async fn connect(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| anyhow::anyhow!("media devices unavailable: {:?}", e))?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| anyhow::anyhow!("getUserMedia error: {:?}", e))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("microphone denied: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("not a MediaStream: {:?}", e))?;

        let source = self
            .audio_ctx
            .create_media_stream_source(&stream)
            .map_err(|e| anyhow::anyhow!("MediaStreamAudioSourceNode error: {:?}", e))?;
        let analyser = create_analyser(&self.audio_ctx)?;
        _ = source.connect_with_audio_node(&analyser);
        self.buf
            .borrow_mut()
            .resize(analyser.fft_size() as usize, 0.0);
        *self.analyser.borrow_mut() = Some(analyser);
        log::info!("[audio] microphone connected");
        Ok(())
    }

    /// Resume the context; browsers keep it suspended until a user gesture.
    pub fn resume(&self) {
        _ = self.audio_ctx.resume();
    }

    /// Current RMS amplitude in [0, 1].
    pub fn level(&self) -> f32 {
        let analyser = self.analyser.borrow();
        let Some(a) = analyser.as_ref() else {
            return 0.0;
        };
        let mut buf = self.buf.borrow_mut();
        a.get_float_time_domain_data(&mut buf);
        rms(&buf)
    }
}

fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| {
        log::error!("AnalyserNode error: {:?}", e);
        anyhow::anyhow!("AnalyserNode error")
    })?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(analyser)
}

#[inline]
fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}
