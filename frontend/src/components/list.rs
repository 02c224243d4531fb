use crate::components::icons::*;
use crate::directory::use_directory;
use crate::session::{self, use_session};
use crate::web::router::use_router;
use datascope_shared::query::{self, ALL_DEPARTMENTS};
use datascope_shared::{Employee, query::format_usd};
use leptos::prelude::*;

mod chart_view;
mod map_view;

use chart_view::ChartView;
use map_view::MapView;

/// 列表的三种互斥渲染模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ViewMode {
    #[default]
    Table,
    Chart,
    Map,
}

#[component]
pub fn ListPage() -> impl IntoView {
    let session_ctx = use_session();
    let directory = use_directory();
    let router = use_router();

    let (view_mode, set_view_mode) = signal(ViewMode::default());
    let (search, set_search) = signal(String::new());
    let (department, set_department) = signal(ALL_DEPARTMENTS.to_string());
    // 请求页号；有效页是它的纯派生收敛，渲染期间从不回写
    let (requested_page, set_requested_page) = signal(1usize);

    let employees = directory.employees;

    // ---- 派生值：全部来自 shared::query 的纯函数 ----

    let filtered = Memo::new(move |_| {
        employees.with(|all| {
            query::filter(all, &search.get(), &department.get())
                .into_iter()
                .cloned()
                .collect::<Vec<Employee>>()
        })
    });
    let page_count = Memo::new(move |_| query::page_count(filtered.with(Vec::len)));
    let current_page =
        Memo::new(move |_| query::clamp_page(requested_page.get(), filtered.with(Vec::len)));
    let page_window = Memo::new(move |_| {
        query::page_window(filtered.with(Vec::len), current_page.get())
    });
    let page_rows = Memo::new(move |_| {
        let (start, end) = page_window.get();
        filtered.with(|f| f[start..end].to_vec())
    });

    // 聚合基于完整数组而不是过滤结果
    let department_list = Memo::new(move |_| employees.with(|all| query::departments(all)));
    let department_stats = Memo::new(move |_| employees.with(|all| query::department_stats(all)));
    let city_groups = Memo::new(move |_| employees.with(|all| query::city_groups(all)));
    let total_employees = move || employees.with(Vec::len);
    let avg_salary = Memo::new(move |_| employees.with(|all| query::average_salary(all)));
    let city_count = move || city_groups.with(Vec::len);

    let user_initial = move || {
        session_ctx.state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.username.chars().next())
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| session::logout(&session_ctx);

    let select_employee = move |emp: Employee| {
        directory.selected.set(Some(emp));
        router.navigate("/details");
    };

    let mode_button_class = move |mode: ViewMode| {
        if view_mode.get() == mode {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-ghost"
        }
    };

    let show_spinner = move || directory.loading.get() && total_employees() == 0;

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            // 顶栏
            <header class="navbar bg-base-100 shadow-lg sticky top-0 z-50 px-4 md:px-8">
                <div class="flex-1 gap-3">
                    <div class="avatar avatar-placeholder">
                        <div class="bg-primary text-primary-content w-10 rounded-full">
                            <span>{user_initial}</span>
                        </div>
                    </div>
                    <div>
                        <h1 class="text-xl font-bold">"Employee Dashboard"</h1>
                        <p class="text-xs text-base-content/60 uppercase tracking-wider">
                            "Admin Panel"
                        </p>
                    </div>
                </div>
                <div class="flex-none">
                    <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 md:px-8 py-8 space-y-6">
                // 拉取失败：单一静态文案
                <Show when=move || directory.error.with(Option::is_some)>
                    <div role="alert" class="alert alert-error shadow-lg">
                        <span>{move || directory.error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !show_spinner()
                    fallback=|| view! {
                        <div class="flex items-center justify-center py-32">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    // 统计卡片
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-figure text-primary">
                                <Users attr:class="w-8 h-8" />
                            </div>
                            <div class="stat-title">"Total Employees"</div>
                            <div class="stat-value text-primary">{total_employees}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-success">
                                <DollarSign attr:class="w-8 h-8" />
                            </div>
                            <div class="stat-title">"Avg. Salary"</div>
                            <div class="stat-value text-success">
                                {move || format_usd(avg_salary.get())}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-secondary">
                                <Globe attr:class="w-8 h-8" />
                            </div>
                            <div class="stat-title">"Global Locations"</div>
                            <div class="stat-value text-secondary">{city_count}</div>
                        </div>
                    </div>

                    // 控制条：视图切换 / 搜索 / 部门过滤
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body p-4 flex-row flex-wrap gap-4 justify-between items-center">
                            <div class="join">
                                <button
                                    class=move || format!("join-item {}", mode_button_class(ViewMode::Table))
                                    on:click=move |_| set_view_mode.set(ViewMode::Table)
                                >
                                    <LayoutGrid attr:class="w-4 h-4" /> "Table"
                                </button>
                                <button
                                    class=move || format!("join-item {}", mode_button_class(ViewMode::Chart))
                                    on:click=move |_| set_view_mode.set(ViewMode::Chart)
                                >
                                    <BarChart3 attr:class="w-4 h-4" /> "Chart"
                                </button>
                                <button
                                    class=move || format!("join-item {}", mode_button_class(ViewMode::Map))
                                    on:click=move |_| set_view_mode.set(ViewMode::Map)
                                >
                                    <Globe attr:class="w-4 h-4" /> "Map"
                                </button>
                            </div>

                            <div class="flex gap-3 flex-wrap">
                                <label class="input input-bordered input-sm flex items-center gap-2 w-full md:w-64">
                                    <Search attr:class="w-4 h-4 opacity-60" />
                                    <input
                                        type="text"
                                        class="grow"
                                        placeholder="Search employee..."
                                        prop:value=search
                                        on:input=move |ev| {
                                            set_search.set(event_target_value(&ev));
                                            // 搜索词一变就回到第一页
                                            set_requested_page.set(1);
                                        }
                                    />
                                </label>

                                <select
                                    class="select select-bordered select-sm w-full md:w-48"
                                    on:change=move |ev| set_department.set(event_target_value(&ev))
                                >
                                    <For
                                        each=move || department_list.get()
                                        key=|dept| dept.clone()
                                        children=move |dept| {
                                            let value = dept.clone();
                                            view! {
                                                <option
                                                    value=value.clone()
                                                    selected=move || department.get() == value
                                                >
                                                    {dept}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </div>
                        </div>
                    </div>

                    // 当前视图
                    {move || match view_mode.get() {
                        ViewMode::Table => view! {
                            <TableSection
                                page_rows=page_rows
                                filtered=filtered
                                page_window=page_window
                                page_count=page_count
                                current_page=current_page
                                set_requested_page=set_requested_page
                                on_select=select_employee
                            />
                        }
                        .into_any(),
                        ViewMode::Chart => view! {
                            <ChartView stats=department_stats />
                        }
                        .into_any(),
                        ViewMode::Map => view! {
                            <MapView groups=city_groups />
                        }
                        .into_any(),
                    }}
                </Show>
            </main>
        </div>
    }
}

/// 表格视图：分页行、空态占位、页脚分页器
#[component]
fn TableSection(
    page_rows: Memo<Vec<Employee>>,
    filtered: Memo<Vec<Employee>>,
    page_window: Memo<(usize, usize)>,
    page_count: Memo<usize>,
    current_page: Memo<usize>,
    set_requested_page: WriteSignal<usize>,
    on_select: impl Fn(Employee) + Copy + Send + 'static,
) -> impl IntoView {
    let showing = move || {
        let (start, end) = page_window.get();
        let total = filtered.with(Vec::len);
        if total == 0 {
            "Showing 0 entries".to_string()
        } else {
            format!("Showing {} to {} of {} entries", start + 1, end, total)
        }
    };

    let goto_prev = move |_| set_requested_page.set(current_page.get_untracked().saturating_sub(1).max(1));
    let goto_next = move |_| {
        set_requested_page.set((current_page.get_untracked() + 1).min(page_count.get_untracked()))
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Employee Info"</th>
                                <th>"Department"</th>
                                <th>"Location"</th>
                                <th>"Salary"</th>
                                <th>"Joined"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || page_rows.get()
                                key=|emp| emp.id
                                children=move |emp| {
                                    let initial = emp
                                        .username
                                        .chars()
                                        .next()
                                        .map(|c| c.to_string())
                                        .unwrap_or_default();
                                    let selected = emp.clone();
                                    view! {
                                        <tr
                                            class="hover cursor-pointer"
                                            on:click=move |_| on_select(selected.clone())
                                        >
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <div class="avatar avatar-placeholder">
                                                        <div class="bg-neutral text-neutral-content w-10 rounded-full">
                                                            <span>{initial}</span>
                                                        </div>
                                                    </div>
                                                    <span class="font-medium">{emp.username.clone()}</span>
                                                </div>
                                            </td>
                                            <td>
                                                <span class="badge badge-outline badge-primary">
                                                    {emp.department.clone()}
                                                </span>
                                            </td>
                                            <td>
                                                <span class="flex items-center gap-2 text-base-content/70">
                                                    <MapPin attr:class="w-4 h-4" /> {emp.city.clone()}
                                                </span>
                                            </td>
                                            <td class="font-mono text-success">
                                                {format_usd(emp.salary)}
                                            </td>
                                            <td class="text-base-content/60">{emp.join_date.clone()}</td>
                                            <td>
                                                <span class="text-primary text-xs font-medium">
                                                    "View Details →"
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Show when=move || filtered.with(Vec::is_empty)>
                    <div class="flex flex-col items-center justify-center py-20 text-base-content/50 gap-4">
                        <Search attr:class="w-12 h-12 opacity-20" />
                        <p>"No employees found matching your criteria."</p>
                    </div>
                </Show>

                // 分页器
                <div class="flex items-center justify-between px-6 py-4 border-t border-base-200">
                    <div class="text-xs text-base-content/60">{showing}</div>
                    <div class="join">
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || current_page.get() == 1
                            on:click=goto_prev
                        >
                            <ChevronLeft attr:class="w-4 h-4" />
                        </button>
                        <For
                            each=move || query::page_numbers(filtered.with(Vec::len))
                            key=|n| *n
                            children=move |n| {
                                view! {
                                    <button
                                        class=move || {
                                            if current_page.get() == n {
                                                "join-item btn btn-sm btn-primary"
                                            } else {
                                                "join-item btn btn-sm"
                                            }
                                        }
                                        on:click=move |_| set_requested_page.set(n)
                                    >
                                        {n}
                                    </button>
                                }
                            }
                        />
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || current_page.get() == page_count.get()
                            on:click=goto_next
                        >
                            <ChevronRight attr:class="w-4 h-4" />
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
