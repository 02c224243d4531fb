//! 会话模块
//!
//! 会话即 LocalStorage 里是否存在一个 `User` blob：登录写入、注销删除、
//! 启动时读取恢复。没有服务端会话、令牌或过期机制。
//! 路由服务通过注入的会话信号来执行守卫，与本模块解耦。

use crate::web::{self, LocalStorage};
use datascope_shared::{DEMO_PASSWORD, DEMO_USERNAME, STORAGE_USER_KEY, User};
use leptos::prelude::*;

/// 会话状态
#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// 当前用户（仅登录后存在）
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 会话信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 启动时从 LocalStorage 恢复会话
///
/// blob 不存在或解码失败都视为未登录。
pub fn init_session(ctx: &SessionContext) {
    if let Some(user) = LocalStorage::get_json::<User>(STORAGE_USER_KEY) {
        ctx.set_state.update(|state| state.user = Some(user));
    }
}

/// 校验演示凭据（纯字符串比对）
pub fn credentials_valid(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// 建立会话：构造 `User`、持久化、更新内存状态
///
/// 调用方负责先通过 [`credentials_valid`] 校验。
/// 导航由路由服务监听会话信号自动完成。
pub fn login(ctx: &SessionContext, username: String) {
    let user = User {
        id: "1".to_string(),
        username,
        join_date: web::now_timestamp().to_ymd(),
    };
    LocalStorage::set_json(STORAGE_USER_KEY, &user);
    ctx.set_state.update(|state| state.user = Some(user));
}

/// 注销并清除持久化的用户
///
/// 不需要手动导航，路由服务会监听会话变化并自动重定向。
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_USER_KEY);
    ctx.set_state.update(|state| state.user = None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_demo_pair_is_accepted() {
        assert!(credentials_valid("testuser", "Test123"));
        assert!(!credentials_valid("testuser", "test123"));
        assert!(!credentials_valid("TESTUSER", "Test123"));
        assert!(!credentials_valid("", ""));
        assert!(!credentials_valid("admin", "admin"));
    }
}
