use crate::components::icons::*;
use crate::directory::use_directory;
use crate::web::router::use_router;
use crate::web::{self, LocalStorage, camera};
use datascope_shared::query::format_usd;
use datascope_shared::{CapturedPhoto, STORAGE_PHOTO_KEY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

#[component]
pub fn DetailsPage() -> impl IntoView {
    let directory = use_directory();
    let router = use_router();

    // 选中项只在内存里：刷新后为空，本页退回列表
    Effect::new(move |_| {
        if directory.selected.with(Option::is_none) {
            router.redirect("/list");
        }
    });

    let (show_camera, set_show_camera) = signal(false);
    let (camera_ready, set_camera_ready) = signal(false);
    let (captured_image, set_captured_image) = signal(Option::<String>::None);
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let employee = Memo::new(move |_| directory.selected.get());

    let start_camera = move || {
        set_show_camera.set(true);
        set_camera_ready.set(false);
        spawn_local(async move {
            match camera::open_preview().await {
                Ok(stream) => match video_ref.get_untracked() {
                    Some(video) => {
                        camera::attach(&video, &stream);
                        set_camera_ready.set(true);
                    }
                    None => {
                        // 授权期间视图已经卸载，立即归还设备
                        camera::stop_stream(&stream);
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("[Camera] {}", err).into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Camera permission denied or not available. \
                             Please check your browser settings.",
                        );
                    }
                    set_show_camera.set(false);
                }
            }
        });
    };

    let capture_photo = move |_| {
        let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked())
        else {
            return;
        };
        match camera::snapshot(&video, &canvas) {
            Ok(data_url) => set_captured_image.set(Some(data_url)),
            Err(err) => web_sys::console::error_1(&format!("[Camera] {}", err).into()),
        }
        camera::stop(&video);
        set_show_camera.set(false);
    };

    let cancel_camera = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            camera::stop(&video);
        }
        set_show_camera.set(false);
    };

    let retake_photo = move |_| {
        set_captured_image.set(None);
        start_camera();
    };

    let save_photo = move |_| {
        let Some(employee) = directory.selected.get_untracked() else {
            return;
        };
        let Some(image) = captured_image.get_untracked() else {
            return;
        };
        let photo = CapturedPhoto {
            employee_id: employee.id,
            image,
            captured_at: web::now_timestamp(),
        };
        LocalStorage::set_json(STORAGE_PHOTO_KEY, &photo);
        // 与原生流程一致的 300ms 人为延迟
        set_timeout(
            move || router.navigate("/photo-result"),
            Duration::from_millis(300),
        );
    };

    let on_back = move |_| directory.selected.set(None);

    // 视图卸载兜底：任何形态下都不留下亮着的摄像头
    on_cleanup(move || {
        if let Some(video) = video_ref.get_untracked() {
            camera::stop(&video);
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <header class="navbar bg-base-100 shadow-lg px-4 md:px-8">
                <div class="flex-1">
                    <button on:click=on_back class="btn btn-ghost gap-2">
                        <ArrowLeft attr:class="w-4 h-4" /> "Back to Dashboard"
                    </button>
                </div>
                <div class="flex-none items-center gap-3">
                    <span class="badge badge-success badge-outline hidden md:inline-flex">
                        "Active Record"
                    </span>
                    <h1 class="text-xl font-bold">"Employee Profile"</h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 md:px-8 py-8 grid lg:grid-cols-12 gap-6">
                // 左列：档案卡
                <div class="lg:col-span-4">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center">
                            <div class="avatar avatar-placeholder">
                                <div class="bg-primary text-primary-content w-32 rounded-full">
                                    <span class="text-5xl">
                                        {move || {
                                            employee
                                                .get()
                                                .and_then(|e| e.username.chars().next())
                                                .map(|c| c.to_string())
                                                .unwrap_or_default()
                                        }}
                                    </span>
                                </div>
                            </div>
                            <h2 class="text-2xl font-bold mt-4">
                                {move || employee.get().map(|e| e.username).unwrap_or_default()}
                            </h2>
                            <p class="text-primary text-sm uppercase tracking-widest">
                                {move || employee.get().map(|e| e.department).unwrap_or_default()}
                            </p>

                            <div class="divider"></div>

                            <div class="w-full space-y-3">
                                <InfoRow label="Annual Salary">
                                    <DollarSign attr:class="w-4 h-4 text-success" />
                                    {move || {
                                        employee.get().map(|e| format_usd(e.salary)).unwrap_or_default()
                                    }}
                                </InfoRow>
                                <InfoRow label="Join Date">
                                    <Calendar attr:class="w-4 h-4 text-info" />
                                    {move || employee.get().map(|e| e.join_date).unwrap_or_default()}
                                </InfoRow>
                                <InfoRow label="Location">
                                    <MapPin attr:class="w-4 h-4 text-secondary" />
                                    {move || employee.get().map(|e| e.city).unwrap_or_default()}
                                </InfoRow>
                                <InfoRow label="Employee ID">
                                    <ShieldCheck attr:class="w-4 h-4 text-accent" />
                                    {move || employee.get().map(|e| e.badge()).unwrap_or_default()}
                                </InfoRow>
                            </div>
                        </div>
                    </div>
                </div>

                // 右列：拍照区
                <div class="lg:col-span-8">
                    <div class="card bg-base-100 shadow-xl min-h-96">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h3 class="card-title flex items-center gap-2">
                                    <Camera attr:class="w-5 h-5 text-primary" />
                                    "Identity Verification"
                                </h3>
                                <Show when=move || show_camera.get()>
                                    <span class="flex items-center gap-2 text-xs font-bold text-error animate-pulse">
                                        <span class="w-2 h-2 rounded-full bg-error"></span>
                                        "LIVE FEED"
                                    </span>
                                </Show>
                            </div>

                            <div class="flex-1 flex flex-col items-center justify-center py-6">
                                // 空态
                                <Show when=move || !show_camera.get() && captured_image.with(Option::is_none)>
                                    <div class="text-center space-y-4">
                                        <div class="w-24 h-24 mx-auto rounded-full bg-base-200 flex items-center justify-center">
                                            <User attr:class="w-10 h-10 opacity-40" />
                                        </div>
                                        <div>
                                            <h4 class="text-lg font-bold">"No Photo Available"</h4>
                                            <p class="text-base-content/60 max-w-sm">
                                                "Capture a live photo to update the employee's official record."
                                            </p>
                                        </div>
                                        <button
                                            on:click=move |_| start_camera()
                                            class="btn btn-primary gap-2"
                                        >
                                            <Camera attr:class="w-4 h-4" /> "Initialize Camera"
                                        </button>
                                    </div>
                                </Show>

                                // 取景
                                <Show when=move || show_camera.get()>
                                    <div class="w-full max-w-2xl">
                                        <div class="rounded-box overflow-hidden bg-black aspect-video">
                                            <video
                                                node_ref=video_ref
                                                autoplay=true
                                                playsinline=true
                                                prop:muted=true
                                                class=move || {
                                                    if camera_ready.get() {
                                                        "w-full h-full object-cover -scale-x-100"
                                                    } else {
                                                        "w-full h-full object-cover -scale-x-100 opacity-0"
                                                    }
                                                }
                                            ></video>
                                        </div>
                                        <div class="flex justify-center gap-4 mt-6">
                                            <button on:click=cancel_camera class="btn gap-2">
                                                <X attr:class="w-4 h-4" /> "Cancel"
                                            </button>
                                            <button
                                                on:click=capture_photo
                                                disabled=move || !camera_ready.get()
                                                class="btn btn-primary gap-2"
                                            >
                                                <Camera attr:class="w-4 h-4" /> "Capture Snapshot"
                                            </button>
                                        </div>
                                    </div>
                                </Show>

                                // 快照预览
                                <Show when=move || captured_image.with(Option::is_some)>
                                    <div class="w-full max-w-md text-center">
                                        <img
                                            src=move || captured_image.get().unwrap_or_default()
                                            alt="Captured"
                                            class="rounded-box border-4 border-base-300 mx-auto max-h-96 object-cover"
                                        />
                                        <div class="flex justify-center gap-4 mt-6">
                                            <button on:click=retake_photo class="btn gap-2">
                                                <RotateCcw attr:class="w-4 h-4" /> "Retake"
                                            </button>
                                            <button on:click=save_photo class="btn btn-success gap-2">
                                                <Save attr:class="w-4 h-4" /> "Save to Profile"
                                            </button>
                                        </div>
                                    </div>
                                </Show>

                                <canvas node_ref=canvas_ref class="hidden"></canvas>
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// 档案卡里的一行信息
#[component]
fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-3 rounded-box bg-base-200">
            <span class="text-xs text-base-content/60 uppercase tracking-wider font-semibold">
                {label}
            </span>
            <span class="flex items-center gap-2 text-sm font-medium">{children()}</span>
        </div>
    }
}
