//! 摄像头封装模块
//!
//! 封装 MediaDevices 的取流、快照与释放。释放集中在唯一的 [`stop`]
//! 函数：拍照、取消、视图卸载三条路径都走它，避免任何一条忘记
//! 关闭轨道而让摄像头指示灯常亮。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints,
};

/// 摄像头错误类型
#[derive(Debug)]
pub enum CameraError {
    /// 浏览器没有 MediaDevices（非安全上下文等）
    Unavailable(String),
    /// 用户拒绝授权或设备被占用
    Denied(String),
    /// 取帧或导出 PNG 失败
    Capture(String),
}

impl core::fmt::Display for CameraError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CameraError::Unavailable(msg) => write!(f, "camera unavailable: {}", msg),
            CameraError::Denied(msg) => write!(f, "camera permission denied: {}", msg),
            CameraError::Capture(msg) => write!(f, "snapshot failed: {}", msg),
        }
    }
}

/// `{ ideal: value }` 形式的约束对象
fn ideal(value: f64) -> Result<JsValue, CameraError> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"ideal".into(), &value.into())
        .map_err(|e| CameraError::Unavailable(format!("{:?}", e)))?;
    Ok(obj.into())
}

/// 请求前置摄像头预览流
///
/// 约束与原生相机页一致：`facingMode: "user"`，理想分辨率 1280x720。
/// 授权弹窗没有超时，Promise 可能悬挂到用户作出选择。
pub async fn open_preview() -> Result<MediaStream, CameraError> {
    let window =
        web_sys::window().ok_or_else(|| CameraError::Unavailable("no window".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CameraError::Unavailable(format!("{:?}", e)))?;

    let video = MediaTrackConstraints::new();
    video.set_facing_mode(&"user".into());
    video.set_width(&ideal(1280.0)?);
    video.set_height(&ideal(720.0)?);

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video.into());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Unavailable(format!("{:?}", e)))?;

    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| CameraError::Denied(format!("{:?}", e)))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|e| CameraError::Unavailable(format!("{:?}", e)))
}

/// 把流挂到 video 元素并开始播放
pub fn attach(video: &HtmlVideoElement, stream: &MediaStream) {
    video.set_src_object(Some(stream));
    let _ = video.play();
}

/// 把当前帧画到离屏 canvas 并导出 PNG data URL
///
/// canvas 尺寸取视频的固有分辨率，避免拉伸。
pub fn snapshot(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<String, CameraError> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context = canvas
        .get_context("2d")
        .map_err(|e| CameraError::Capture(format!("{:?}", e)))?
        .ok_or_else(|| CameraError::Capture("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| CameraError::Capture(format!("{:?}", e)))?;

    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|e| CameraError::Capture(format!("{:?}", e)))?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| CameraError::Capture(format!("{:?}", e)))
}

/// 停止流上的所有轨道
///
/// 供流还没来得及挂到 video 上的场景直接调用。
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// 停止 video 上挂着的流的所有轨道并解除绑定
///
/// 唯一的释放路径；对没有流的 video 调用是幂等的。
pub fn stop(video: &HtmlVideoElement) {
    let Some(src) = video.src_object() else {
        return;
    };
    stop_stream(&src);
    video.set_src_object(None);
}
