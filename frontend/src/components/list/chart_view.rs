//! 图表视图：两张原生 SVG 柱状图
//!
//! 不引入 JS 图表库，直接用响应式 SVG 画部门人数与平均工资，
//! 同时也避免给 WASM 包增加体积。

use datascope_shared::query::{DepartmentStat, format_usd};
use leptos::prelude::*;

/// 横向人数条形图的布局常量
const COUNT_CHART_WIDTH: f64 = 480.0;
const COUNT_LABEL_WIDTH: f64 = 130.0;
const COUNT_ROW_HEIGHT: f64 = 36.0;
const COUNT_BAR_HEIGHT: f64 = 20.0;

/// 纵向工资柱状图的布局常量
const SALARY_CHART_WIDTH: f64 = 480.0;
const SALARY_CHART_HEIGHT: f64 = 260.0;
const SALARY_PLOT_HEIGHT: f64 = 190.0;
const SALARY_BAR_WIDTH: f64 = 28.0;

#[component]
pub fn ChartView(#[prop(into)] stats: Signal<Vec<DepartmentStat>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Employee Distribution"</h3>
                    <p class="text-sm text-base-content/60">"Breakdown by department"</p>
                    {move || count_chart(&stats.get())}
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Average Salary Analysis"</h3>
                    <p class="text-sm text-base-content/60">"Compensation across teams"</p>
                    {move || salary_chart(&stats.get())}
                </div>
            </div>
        </div>
    }
}

/// 部门人数：横向条形，条长与最大人数成比例
fn count_chart(stats: &[DepartmentStat]) -> AnyView {
    if stats.is_empty() {
        return empty_placeholder();
    }

    let max_count = stats.iter().map(|s| s.count).max().unwrap_or(1).max(1) as f64;
    let height = stats.len() as f64 * COUNT_ROW_HEIGHT + 8.0;
    let track_width = COUNT_CHART_WIDTH - COUNT_LABEL_WIDTH - 60.0;

    let bars = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let y = i as f64 * COUNT_ROW_HEIGHT + 8.0;
            let bar_width = (stat.count as f64 / max_count) * track_width;
            let fill = if i % 2 == 0 { "#6366f1" } else { "#8b5cf6" };
            view! {
                <g>
                    <text
                        x={COUNT_LABEL_WIDTH - 8.0}
                        y={y + COUNT_BAR_HEIGHT - 5.0}
                        text-anchor="end"
                        class="fill-current opacity-70"
                        font-size="12"
                    >
                        {stat.name.clone()}
                    </text>
                    <rect
                        x={COUNT_LABEL_WIDTH}
                        y={y}
                        width={bar_width.max(2.0)}
                        height={COUNT_BAR_HEIGHT}
                        rx="4"
                        fill=fill
                    />
                    <text
                        x={COUNT_LABEL_WIDTH + bar_width.max(2.0) + 8.0}
                        y={y + COUNT_BAR_HEIGHT - 5.0}
                        class="fill-current opacity-70"
                        font-size="12"
                    >
                        {stat.count}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox={format!("0 0 {} {}", COUNT_CHART_WIDTH, height)}
            class="w-full"
            role="img"
        >
            {bars}
        </svg>
    }
    .into_any()
}

/// 部门平均工资：纵向柱状，柱高与最高平均工资成比例
fn salary_chart(stats: &[DepartmentStat]) -> AnyView {
    if stats.is_empty() {
        return empty_placeholder();
    }

    let max_salary = stats
        .iter()
        .map(|s| s.avg_salary)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let slot = SALARY_CHART_WIDTH / stats.len() as f64;

    let bars = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let bar_height = (stat.avg_salary / max_salary) * SALARY_PLOT_HEIGHT;
            let x = i as f64 * slot + (slot - SALARY_BAR_WIDTH) / 2.0;
            let y = 20.0 + SALARY_PLOT_HEIGHT - bar_height;
            let center = x + SALARY_BAR_WIDTH / 2.0;
            let fill = if i % 2 == 0 { "#10b981" } else { "#059669" };
            view! {
                <g>
                    <text
                        x={center}
                        y={y - 6.0}
                        text-anchor="middle"
                        class="fill-current opacity-70"
                        font-size="10"
                    >
                        {format_usd(stat.avg_salary)}
                    </text>
                    <rect
                        x={x}
                        y={y}
                        width={SALARY_BAR_WIDTH}
                        height={bar_height.max(2.0)}
                        rx="4"
                        fill=fill
                    />
                    <text
                        x={center}
                        y={SALARY_CHART_HEIGHT - 24.0}
                        text-anchor="end"
                        transform={format!("rotate(-35 {} {})", center, SALARY_CHART_HEIGHT - 24.0)}
                        class="fill-current opacity-70"
                        font-size="10"
                    >
                        {stat.name.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox={format!("0 0 {} {}", SALARY_CHART_WIDTH, SALARY_CHART_HEIGHT)}
            class="w-full"
            role="img"
        >
            {bars}
        </svg>
    }
    .into_any()
}

fn empty_placeholder() -> AnyView {
    view! {
        <div class="py-16 text-center text-base-content/50">"No data yet."</div>
    }
    .into_any()
}
