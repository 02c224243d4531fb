//! 员工目录状态
//!
//! 顶层持有完整员工数组与 "当前查看的员工"。选中项只存在内存里，
//! 刷新即丢失，详情页因此会退回列表。

use crate::api;
use datascope_shared::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 员工拉取失败时的静态文案
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load employee data. Please try again later.";

/// 目录上下文
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    /// 完整员工数组，会话期间不可变
    pub employees: RwSignal<Vec<Employee>>,
    /// 初次拉取是否仍在进行
    pub loading: RwSignal<bool>,
    /// 拉取失败的用户可见文案
    pub error: RwSignal<Option<String>>,
    /// 当前查看的员工（不持久化）
    pub selected: RwSignal<Option<Employee>>,
}

impl DirectoryContext {
    pub fn new() -> Self {
        Self {
            employees: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            selected: RwSignal::new(None),
        }
    }
}

/// 从 Context 获取目录上下文
pub fn use_directory() -> DirectoryContext {
    use_context::<DirectoryContext>().expect("DirectoryContext should be provided")
}

/// 启动时的一次性拉取
///
/// 与原生行为一致：挂载即拉取，不等登录。
pub fn load_employees(ctx: DirectoryContext) {
    ctx.loading.set(true);
    spawn_local(async move {
        match api::fetch_employees().await {
            Ok(data) => {
                ctx.error.set(None);
                ctx.employees.set(data);
            }
            Err(err) => {
                web_sys::console::error_1(
                    &format!("[Api] Failed to fetch employees: {}", err).into(),
                );
                ctx.error.set(Some(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
        ctx.loading.set(false);
    });
}
