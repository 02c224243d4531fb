//! DataScope 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `directory`: 员工目录状态
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod details;
    mod icons;
    pub mod list;
    pub mod login;
    pub mod photo_result;
}
mod directory;
mod session;
pub(crate) mod web;

use crate::components::details::DetailsPage;
use crate::components::list::ListPage;
use crate::components::login::LoginPage;
use crate::components::photo_result::PhotoResultPage;
use crate::directory::DirectoryContext;
use crate::session::{SessionContext, init_session};

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::List => view! { <ListPage /> }.into_any(),
        AppRoute::Details => view! { <DetailsPage /> }.into_any(),
        AppRoute::PhotoResult => view! { <PhotoResultPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并从 LocalStorage 恢复
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    init_session(&session_ctx);

    // 2. 创建目录上下文，挂载即拉取员工列表（不等登录）
    let directory_ctx = DirectoryContext::new();
    provide_context(directory_ctx);
    directory::load_employees(directory_ctx);

    // 3. 获取会话信号，注入路由服务（解耦！）
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入会话信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
