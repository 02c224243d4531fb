//! Pure derivations over the in-memory employee list.
//!
//! The list view never mutates state while rendering: everything it shows
//! (filtered subset, page window, aggregates) is recomputed here from the
//! full array and the current inputs. In particular the effective page is a
//! derived clamp of the requested page, not a state write.

use crate::{Employee, PAGE_SIZE};

/// 部门过滤器的 "全部" 档
pub const ALL_DEPARTMENTS: &str = "All";

// =========================================================
// 过滤
// =========================================================

/// 去重后的部门列表，保持首次出现顺序，首项恒为 `All`
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut out = vec![ALL_DEPARTMENTS.to_string()];
    for emp in employees {
        if !out[1..].iter().any(|d| d == &emp.department) {
            out.push(emp.department.clone());
        }
    }
    out
}

/// 单个员工是否命中搜索词（大小写不敏感的子串匹配，三个文本字段任一命中）
fn matches_search(emp: &Employee, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || emp.username.to_lowercase().contains(needle_lower)
        || emp.department.to_lowercase().contains(needle_lower)
        || emp.city.to_lowercase().contains(needle_lower)
}

/// 过滤：搜索词命中 且 部门相等（`All` 不限部门）
pub fn filter<'a>(employees: &'a [Employee], search: &str, department: &str) -> Vec<&'a Employee> {
    let needle = search.to_lowercase();
    employees
        .iter()
        .filter(|emp| {
            matches_search(emp, &needle)
                && (department == ALL_DEPARTMENTS || emp.department == department)
        })
        .collect()
}

// =========================================================
// 分页
// =========================================================

/// 总页数，空列表也算一页
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// 请求页号的纯派生收敛：收敛到 `[1, page_count]`
pub fn clamp_page(requested: usize, filtered_len: usize) -> usize {
    requested.clamp(1, page_count(filtered_len))
}

/// 一页的窗口，`page` 从 1 起
pub fn page_window(filtered_len: usize, page: usize) -> (usize, usize) {
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered_len);
    (start.min(filtered_len), end)
}

/// 分页器要渲染的页号序列 `1..=page_count`
pub fn page_numbers(filtered_len: usize) -> Vec<usize> {
    (1..=page_count(filtered_len)).collect()
}

/// 从过滤结果中切出当前页
pub fn paginate<'a>(filtered: &[&'a Employee], requested_page: usize) -> Vec<&'a Employee> {
    let page = clamp_page(requested_page, filtered.len());
    let (start, end) = page_window(filtered.len(), page);
    filtered[start..end].to_vec()
}

// =========================================================
// 聚合
// =========================================================

/// 单个部门的聚合：人数与四舍五入后的平均工资
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentStat {
    pub name: String,
    pub count: usize,
    pub avg_salary: f64,
}

/// 按部门聚合整个员工数组（不是过滤后的子集），保持首次出现顺序
pub fn department_stats(employees: &[Employee]) -> Vec<DepartmentStat> {
    let mut stats: Vec<DepartmentStat> = Vec::new();
    let mut sums: Vec<f64> = Vec::new();

    for emp in employees {
        match stats.iter().position(|s| s.name == emp.department) {
            Some(i) => {
                stats[i].count += 1;
                sums[i] += emp.salary;
            }
            None => {
                stats.push(DepartmentStat {
                    name: emp.department.clone(),
                    count: 1,
                    avg_salary: 0.0,
                });
                sums.push(emp.salary);
            }
        }
    }

    for (stat, sum) in stats.iter_mut().zip(sums) {
        stat.avg_salary = (sum / stat.count as f64).round();
    }
    stats
}

/// 全员四舍五入平均工资，空列表为 0
pub fn average_salary(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    let sum: f64 = employees.iter().map(|e| e.salary).sum();
    (sum / employees.len() as f64).round()
}

/// 去重城市列表，保持首次出现顺序
pub fn cities(employees: &[Employee]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for emp in employees {
        if !out.iter().any(|c| c == &emp.city) {
            out.push(emp.city.clone());
        }
    }
    out
}

/// 地图视图的城市分组
#[derive(Debug, Clone, PartialEq)]
pub struct CityGroup {
    pub name: String,
    /// 该城市的全部员工，保持输入顺序
    pub members: Vec<Employee>,
}

/// 按城市分组整个员工数组，保持首次出现顺序
pub fn city_groups(employees: &[Employee]) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    for emp in employees {
        match groups.iter_mut().find(|g| g.name == emp.city) {
            Some(group) => group.members.push(emp.clone()),
            None => groups.push(CityGroup {
                name: emp.city.clone(),
                members: vec![emp.clone()],
            }),
        }
    }
    groups
}

// =========================================================
// 展示格式
// =========================================================

/// 千分位美元格式："1234567.0" -> "$1,234,567"
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 辅助函数
    // =========================================================

    fn emp(id: i64, username: &str, department: &str, city: &str, salary: f64) -> Employee {
        Employee {
            id,
            username: username.to_string(),
            department: department.to_string(),
            city: city.to_string(),
            join_date: "2020/01/01".to_string(),
            salary,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            emp(1, "Tiger Nixon", "Engineering", "Edinburgh", 320_800.0),
            emp(2, "Garrett Winters", "Accounting", "Tokyo", 170_750.0),
            emp(3, "Ashton Cox", "Accounting", "San Francisco", 86_000.0),
            emp(4, "Cedric Kelly", "Engineering", "Edinburgh", 433_060.0),
            emp(5, "Airi Satou", "Accounting", "Tokyo", 162_700.0),
        ]
    }

    // =========================================================
    // 过滤
    // =========================================================

    #[test]
    fn search_is_case_insensitive_across_three_fields() {
        let staff = staff();
        assert_eq!(filter(&staff, "TOKYO", ALL_DEPARTMENTS).len(), 2);
        assert_eq!(filter(&staff, "engineer", ALL_DEPARTMENTS).len(), 2);
        assert_eq!(filter(&staff, "airi", ALL_DEPARTMENTS).len(), 1);
    }

    #[test]
    fn department_filter_intersects_with_search() {
        let staff = staff();
        let hits = filter(&staff, "tokyo", "Accounting");
        assert_eq!(hits.len(), 2);
        let hits = filter(&staff, "tokyo", "Engineering");
        assert!(hits.is_empty());
    }

    #[test]
    fn unmatched_search_yields_empty_set() {
        let staff = staff();
        assert!(filter(&staff, "nobody at all", ALL_DEPARTMENTS).is_empty());
    }

    #[test]
    fn departments_keep_first_seen_order_with_all_first() {
        assert_eq!(
            departments(&staff()),
            vec!["All", "Engineering", "Accounting"]
        );
    }

    // =========================================================
    // 分页
    // =========================================================

    #[test]
    fn twenty_five_rows_make_three_pages_last_with_five() {
        let staff: Vec<Employee> = (0..25)
            .map(|i| emp(i, &format!("e{}", i), "D", "C", 100.0))
            .collect();
        let filtered = filter(&staff, "", ALL_DEPARTMENTS);

        assert_eq!(page_count(filtered.len()), 3);
        assert_eq!(paginate(&filtered, 1).len(), 10);
        assert_eq!(paginate(&filtered, 2).len(), 10);
        assert_eq!(paginate(&filtered, 3).len(), 5);
    }

    #[test]
    fn requested_page_clamps_when_filter_shrinks_the_set() {
        // 曾经在第 3 页，过滤后只剩 1 页：有效页必须收敛而不是越界
        assert_eq!(clamp_page(3, 4), 1);
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(2, 25), 2);
        assert_eq!(clamp_page(9, 25), 3);
    }

    #[test]
    fn page_numbers_enumerate_every_page() {
        assert_eq!(page_numbers(0), vec![1]);
        assert_eq!(page_numbers(10), vec![1]);
        assert_eq!(page_numbers(25), vec![1, 2, 3]);
    }

    #[test]
    fn empty_set_still_has_one_page() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_window(0, 1), (0, 0));
        let filtered: Vec<&Employee> = Vec::new();
        assert!(paginate(&filtered, 1).is_empty());
    }

    // =========================================================
    // 聚合
    // =========================================================

    #[test]
    fn department_stats_count_and_average() {
        let stats = department_stats(&staff());
        assert_eq!(stats.len(), 2);

        let accounting = stats.iter().find(|s| s.name == "Accounting").unwrap();
        assert_eq!(accounting.count, 3);
        // (170750 + 86000 + 162700) / 3 = 139816.67 -> 139817
        assert_eq!(accounting.avg_salary, 139_817.0);

        let engineering = stats.iter().find(|s| s.name == "Engineering").unwrap();
        assert_eq!(engineering.count, 2);
        assert_eq!(engineering.avg_salary, 376_930.0);
    }

    #[test]
    fn overall_average_is_zero_for_empty_list() {
        assert_eq!(average_salary(&[]), 0.0);
        assert_eq!(average_salary(&staff()), 234_662.0);
    }

    #[test]
    fn city_groups_preserve_first_seen_order() {
        let groups = city_groups(&staff());
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Edinburgh", "Tokyo", "San Francisco"]);
        assert_eq!(groups[1].members.len(), 2);
        assert_eq!(cities(&staff()).len(), 3);
    }

    // =========================================================
    // 展示格式
    // =========================================================

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(950.0), "$950");
        assert_eq!(format_usd(320_800.0), "$320,800");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
        assert_eq!(format_usd(-500.0), "-$500");
    }
}
