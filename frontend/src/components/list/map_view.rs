//! 地图视图：等距圆柱投影的原生 SVG 世界地图
//!
//! 已知办公城市带固定经纬度，未知城市退到 (35°N, 0°E)。
//! 与图表一样不引入第三方地图库。

use crate::components::icons::*;
use datascope_shared::query::CityGroup;
use leptos::prelude::*;

/// 已知办公城市的经纬度 (lat, lon)
const CITY_COORDS: &[(&str, f64, f64)] = &[
    ("Edinburgh", 55.9533, -3.1883),
    ("Tokyo", 35.6895, 139.6917),
    ("San Francisco", 37.7749, -122.4194),
    ("New York", 40.7128, -74.0060),
    ("London", 51.5074, -0.1278),
    ("Sydney", -33.8688, 151.2093),
    ("Singapore", 1.3521, 103.8198),
];

/// 未知城市的兜底坐标
const DEFAULT_COORD: (f64, f64) = (35.0, 0.0);

const MAP_WIDTH: f64 = 720.0;
const MAP_HEIGHT: f64 = 360.0;

/// 地图内联名单最多列出的人数
const POPUP_LIMIT: usize = 5;

/// 超出内联名单上限、折叠进 "+N more" 的人数
fn overflow_count(team_size: usize) -> usize {
    team_size.saturating_sub(POPUP_LIMIT)
}

fn coords_for(city: &str) -> (f64, f64) {
    CITY_COORDS
        .iter()
        .find(|(name, _, _)| *name == city)
        .map(|(_, lat, lon)| (*lat, *lon))
        .unwrap_or(DEFAULT_COORD)
}

/// 等距圆柱投影到 SVG 坐标
fn project(lat: f64, lon: f64) -> (f64, f64) {
    let x = (lon + 180.0) / 360.0 * MAP_WIDTH;
    let y = (90.0 - lat) / 180.0 * MAP_HEIGHT;
    (x, y)
}

#[component]
pub fn MapView(#[prop(into)] groups: Signal<Vec<CityGroup>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title flex items-center gap-2">
                    <Globe attr:class="w-5 h-5 text-primary" /> "Global Workforce"
                </h3>

                <svg
                    viewBox={format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)}
                    class="w-full rounded-box bg-base-200"
                    role="img"
                >
                    // 经纬网
                    {graticule()}
                    // 城市标记
                    {move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|group| {
                                let (lat, lon) = coords_for(&group.name);
                                let (x, y) = project(lat, lon);
                                view! {
                                    <g>
                                        <circle cx={x} cy={y} r="7" fill="#6366f1" opacity="0.35" />
                                        <circle cx={x} cy={y} r="3.5" fill="#6366f1" />
                                        <text
                                            x={x}
                                            y={y - 10.0}
                                            text-anchor="middle"
                                            class="fill-current"
                                            font-size="11"
                                        >
                                            {format!("{} ({})", group.name, group.members.len())}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </svg>

                // 城市名单
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4 mt-4">
                    <For
                        each=move || groups.get()
                        key=|group| group.name.clone()
                        children=move |group| {
                            let extra = overflow_count(group.members.len());
                            let names: Vec<String> = group
                                .members
                                .iter()
                                .take(POPUP_LIMIT)
                                .map(|emp| emp.username.clone())
                                .collect();
                            view! {
                                <div class="p-4 rounded-box bg-base-200">
                                    <div class="flex items-center gap-2 font-bold text-primary mb-1">
                                        <MapPin attr:class="w-4 h-4" /> {group.name.clone()}
                                    </div>
                                    <div class="text-xs text-base-content/60 mb-2">
                                        {format!("Team Size: {}", group.members.len())}
                                    </div>
                                    <ul class="space-y-1">
                                        {names
                                            .into_iter()
                                            .map(|name| view! {
                                                <li class="flex items-center gap-2 text-sm">
                                                    <span class="w-2 h-2 rounded-full bg-success"></span>
                                                    {name}
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                    // 比较表达式必须加花括号，裸 `>` 会被当作标签结束
                                    <Show when={move || extra > 0}>
                                        <div class="text-xs text-primary mt-2 italic">
                                            {format!("+{} more", extra)}
                                        </div>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

/// 每 30° 一条的经纬网背景
fn graticule() -> AnyView {
    let mut lines: Vec<AnyView> = Vec::new();
    let mut lon = -150.0;
    while lon <= 150.0 {
        let (x, _) = project(0.0, lon);
        lines.push(
            view! {
                <line x1={x} y1="0" x2={x} y2={MAP_HEIGHT} stroke="currentColor" stroke-opacity="0.08" />
            }
            .into_any(),
        );
        lon += 30.0;
    }
    let mut lat = -60.0;
    while lat <= 60.0 {
        let (_, y) = project(lat, 0.0);
        lines.push(
            view! {
                <line x1="0" y1={y} x2={MAP_WIDTH} y2={y} stroke="currentColor" stroke-opacity="0.08" />
            }
            .into_any(),
        );
        lat += 30.0;
    }
    lines.into_iter().collect_view().into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_resolves_unknown_falls_back() {
        assert_eq!(coords_for("Tokyo"), (35.6895, 139.6917));
        assert_eq!(coords_for("Atlantis"), DEFAULT_COORD);
    }

    #[test]
    fn projection_maps_corners_and_center() {
        assert_eq!(project(90.0, -180.0), (0.0, 0.0));
        assert_eq!(project(-90.0, 180.0), (MAP_WIDTH, MAP_HEIGHT));
        assert_eq!(project(0.0, 0.0), (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0));
    }

    #[test]
    fn overflow_only_counts_beyond_the_inline_limit() {
        assert_eq!(overflow_count(0), 0);
        assert_eq!(overflow_count(POPUP_LIMIT), 0);
        assert_eq!(overflow_count(POPUP_LIMIT + 3), 3);
    }
}
