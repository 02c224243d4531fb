use crate::components::icons::*;
use crate::web::router::use_router;
use crate::web::{self, LocalStorage};
use datascope_shared::{CapturedPhoto, STORAGE_PHOTO_KEY};
use leptos::prelude::*;

#[component]
pub fn PhotoResultPage() -> impl IntoView {
    let router = use_router();

    // 快照是一次性的：进入页面时读一遍即可，本页不会再写回
    let (photo, _) = signal(LocalStorage::get_json::<CapturedPhoto>(STORAGE_PHOTO_KEY));

    let on_back = move |_| router.navigate("/list");

    let on_download = move |_| {
        if let Some(p) = photo.get_untracked() {
            if !web::save_data_url(&p.image, &p.download_filename()) {
                web_sys::console::error_1(&"[Photo] download failed".into());
            }
        }
    };

    // 旧版存档没有时间戳字段，反序列化后是 0，显示当前日期兜底
    let capture_date = move || {
        photo
            .get()
            .map(|p| {
                if p.captured_at.as_millis() > 0 {
                    p.captured_at.to_display_date()
                } else {
                    web::now_timestamp().to_display_date()
                }
            })
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <header class="navbar bg-base-100 shadow-lg px-4 md:px-8">
                <div class="flex-1">
                    <button on:click=on_back class="btn btn-ghost gap-2">
                        <ArrowLeft attr:class="w-4 h-4" /> "Back to List"
                    </button>
                </div>
                <div class="flex-none">
                    <h1 class="text-xl font-bold">"Capture Result"</h1>
                </div>
            </header>

            <main class="max-w-3xl mx-auto px-4 md:px-8 py-10">
                <Show
                    when=move || photo.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body items-center text-center py-16">
                                    <FileImage attr:class="w-12 h-12 opacity-30" />
                                    <h2 class="text-xl font-bold mt-2">"No Photo Found"</h2>
                                    <p class="text-base-content/60">
                                        "Capture a photo from an employee's profile first."
                                    </p>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center">
                            <div class="flex items-center gap-2 text-success">
                                <CheckCircle attr:class="w-6 h-6" />
                                <h2 class="text-2xl font-bold">"Photo Captured Successfully"</h2>
                            </div>
                            <p class="text-base-content/60">
                                "The photo has been saved to the employee's record."
                            </p>

                            <img
                                src=move || photo.get().map(|p| p.image).unwrap_or_default()
                                alt="Captured employee photo"
                                class="rounded-box border-4 border-base-300 max-h-96 object-cover mt-4"
                            />

                            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 w-full mt-6">
                                <ResultStat label="Employee ID">
                                    <BadgeCheck attr:class="w-4 h-4 text-primary" />
                                    {move || {
                                        photo
                                            .get()
                                            .map(|p| p.employee_id.to_string())
                                            .unwrap_or_default()
                                    }}
                                </ResultStat>
                                <ResultStat label="Capture Date">
                                    <Calendar attr:class="w-4 h-4 text-info" />
                                    {capture_date}
                                </ResultStat>
                                <ResultStat label="Format">
                                    <FileImage attr:class="w-4 h-4 text-secondary" />
                                    "PNG"
                                </ResultStat>
                                <ResultStat label="Status">
                                    <CheckCircle attr:class="w-4 h-4 text-success" />
                                    "Saved"
                                </ResultStat>
                            </div>

                            <div class="flex justify-center gap-4 mt-6">
                                <button on:click=on_download class="btn btn-primary gap-2">
                                    <Download attr:class="w-4 h-4" /> "Download Photo"
                                </button>
                                <button on:click=on_back class="btn gap-2">
                                    <LayoutGrid attr:class="w-4 h-4" /> "Back to List"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}

/// 结果卡下方的一格信息
#[component]
fn ResultStat(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-box bg-base-200 p-3 text-center">
            <div class="text-xs text-base-content/60 uppercase tracking-wider font-semibold">
                {label}
            </div>
            <div class="flex items-center justify-center gap-1.5 text-sm font-medium mt-1">
                {children()}
            </div>
        </div>
    }
}
