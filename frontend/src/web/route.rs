//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义应用的五个路径及各自的守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（默认路由，`/` 与 `/login` 都落在这里）
    #[default]
    Login,
    /// 员工列表（需要会话）
    List,
    /// 员工详情与拍照（需要会话）
    Details,
    /// 拍照结果（需要会话）
    PhotoResult,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/list" => Self::List,
            "/details" => Self::Details,
            "/photo-result" => Self::PhotoResult,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::List => "/list",
            Self::Details => "/details",
            Self::PhotoResult => "/photo-result",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：该路由是否要求存在会话**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::List | Self::Details | Self::PhotoResult)
    }

    /// 已登录用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 守卫拦截时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 登录成功后的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::List
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_login_both_resolve_to_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/list/extra"), AppRoute::NotFound);
    }

    #[test]
    fn exactly_three_routes_are_guarded() {
        let guarded: Vec<AppRoute> = [
            AppRoute::Login,
            AppRoute::List,
            AppRoute::Details,
            AppRoute::PhotoResult,
            AppRoute::NotFound,
        ]
        .into_iter()
        .filter(AppRoute::requires_auth)
        .collect();
        assert_eq!(
            guarded,
            vec![AppRoute::List, AppRoute::Details, AppRoute::PhotoResult]
        );
    }

    #[test]
    fn paths_round_trip_through_the_parser() {
        for route in [AppRoute::Login, AppRoute::List, AppRoute::Details, AppRoute::PhotoResult] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }
}
