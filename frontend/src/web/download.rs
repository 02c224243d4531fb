//! 客户端下载封装模块
//!
//! 通过临时 `<a download>` 元素触发浏览器保存文件，物尽其用后立刻移除。

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// 以指定文件名下载一个 data URL
///
/// 返回是否成功触发（DOM 不可用时为 false）。
pub fn save_data_url(href: &str, filename: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };

    let Ok(anchor) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<HtmlAnchorElement>())
    else {
        return false;
    };

    anchor.set_href(href);
    anchor.set_download(filename);

    if body.append_child(&anchor).is_err() {
        return false;
    }
    anchor.click();
    anchor.remove();
    true
}
