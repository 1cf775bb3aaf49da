use crate::constants::{ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING};
use crate::core::amplitude::{self, AmplitudeSource};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Contexts created outside a user gesture start suspended; resume and report.
fn resume_context(audio_ctx: &web::AudioContext) {
    let promise: js_sys::Promise = match audio_ctx.resume() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[audio] resume error: {:?}", e);
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[audio] context running"),
            Err(e) => log::warn!("[audio] context still suspended: {:?}", e),
        }
    });
}

/// Analyser tapped off a `MediaStream`, sampled once per frame.
///
/// The stream is only observed: the analyser is not connected to the
/// context's destination, so nothing is played back.
pub struct StreamAnalyser {
    source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
}

impl StreamAnalyser {
    pub fn new(audio_ctx: &web::AudioContext, stream: &web::MediaStream) -> anyhow::Result<Self> {
        let source = audio_ctx
            .create_media_stream_source(stream)
            .map_err(|e| anyhow::anyhow!("MediaStreamAudioSourceNode error: {:?}", e))?;
        let analyser = web::AnalyserNode::new(audio_ctx)
            .map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("analyser connect error: {:?}", e))?;
        let bins = analyser.frequency_bin_count() as usize;
        Ok(Self {
            source,
            analyser,
            buf: vec![0; bins],
        })
    }
}

impl AmplitudeSource for StreamAnalyser {
    fn average_volume(&mut self) -> f32 {
        let bins = self.analyser.frequency_bin_count() as usize;
        if self.buf.len() != bins {
            self.buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.buf);
        amplitude::mean_normalized(&self.buf)
    }
}

impl Drop for StreamAnalyser {
    fn drop(&mut self) {
        _ = self.source.disconnect();
    }
}

/// Input (microphone) and output (playback) analysers sharing one context.
///
/// The `AudioContext` is created lazily on the first attached stream.
#[derive(Default)]
pub struct AudioInputs {
    audio_ctx: Option<web::AudioContext>,
    pub input: Option<StreamAnalyser>,
    pub output: Option<StreamAnalyser>,
}

#[derive(Clone, Copy, Debug)]
pub enum Channel {
    Input,
    Output,
}

impl Channel {
    fn label(self) -> &'static str {
        match self {
            Channel::Input => "input",
            Channel::Output => "output",
        }
    }
}

impl AudioInputs {
    fn context(&mut self) -> anyhow::Result<&web::AudioContext> {
        if self.audio_ctx.is_none() {
            let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
            resume_context(&ctx);
            self.audio_ctx = Some(ctx);
        }
        self.audio_ctx
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no audio context"))
    }

    /// Replace a channel's stream. `None` disables the channel (zero volume).
    ///
    /// If the analyser cannot be built the error is logged and the channel is
    /// left disabled.
    pub fn set_stream(&mut self, channel: Channel, stream: Option<&web::MediaStream>) {
        let analyser = match stream {
            Some(stream) => match self
                .context()
                .and_then(|ctx| StreamAnalyser::new(ctx, stream))
            {
                Ok(a) => {
                    log::info!("[audio] {} stream attached", channel.label());
                    Some(a)
                }
                Err(e) => {
                    log::error!("[audio] {} stream error: {:?}", channel.label(), e);
                    None
                }
            },
            None => {
                log::info!("[audio] {} stream cleared", channel.label());
                None
            }
        };
        match channel {
            Channel::Input => self.input = analyser,
            Channel::Output => self.output = analyser,
        }
    }

    /// Drop both analysers and close the context.
    pub fn close(&mut self) {
        self.input = None;
        self.output = None;
        if let Some(ctx) = self.audio_ctx.take() {
            _ = ctx.close();
        }
    }
}
