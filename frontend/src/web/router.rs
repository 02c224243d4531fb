//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 导航时对 History 的写入方式
#[derive(Clone, Copy)]
enum NavMode {
    /// `pushState`：产生新的历史记录
    Push,
    /// `replaceState`：用于重定向，不污染历史
    Replace,
}

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态
fn write_history_state(path: &str, mode: NavMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = match mode {
                NavMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
                NavMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
            };
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入会话检查信号实现与会话系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 会话状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 初始路由从当前 URL 解析
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), NavMode::Push);
    }

    /// 重定向（replaceState，不产生历史记录）
    ///
    /// 供视图自身的守卫使用，例如 `/details` 在没有选中员工时退回列表。
    pub fn redirect(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), NavMode::Replace);
    }

    fn navigate_to_route(&self, target_route: AppRoute, mode: NavMode) {
        let resolved = self.guard(target_route);
        write_history_state(resolved.to_path(), mode);
        self.set_route.set(resolved);
    }

    /// 守卫：把请求的路由收敛为允许加载的路由
    fn guard(&self, target: AppRoute) -> AppRoute {
        let is_auth = self.is_authenticated.get_untracked();

        if target.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            return AppRoute::auth_failure_redirect();
        }
        if target.should_redirect_when_authenticated() && is_auth {
            web_sys::console::log_1(&"[Router] Already signed in. Redirecting to list.".into());
            return AppRoute::auth_success_redirect();
        }
        target
    }

    /// 对启动时的 URL 应用一次守卫
    ///
    /// 会话未恢复时直接重载 `/list` 等受保护页面，应落回登录页。
    fn resolve_initial(&self) {
        let target = self.current_route.get_untracked();
        let resolved = self.guard(target);
        if resolved != target {
            write_history_state(resolved.to_path(), NavMode::Replace);
            self.set_route.set(resolved);
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑；拦截时用 replace 修正地址栏
            let resolved = service.guard(target);
            if resolved != target {
                write_history_state(resolved.to_path(), NavMode::Replace);
            }
            service.set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let service = *self;

        Effect::new(move |_| {
            let is_auth = service.is_authenticated.get();
            let route = service.current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                // 刚登录且停在登录页：推进到列表
                web_sys::console::log_1(&"[Router] Signed in, moving to list.".into());
                service.navigate_to_route(AppRoute::auth_success_redirect(), NavMode::Push);
            } else if !is_auth && route.requires_auth() {
                // 刚注销且停在受保护页面：退回登录
                web_sys::console::log_1(&"[Router] Signed out, moving to login.".into());
                service.navigate_to_route(AppRoute::auth_failure_redirect(), NavMode::Push);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.resolve_initial();
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
