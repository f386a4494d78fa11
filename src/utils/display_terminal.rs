//! 터미널 출력 포맷팅 유틸리티
//!
//! 레지스트리 초기화 과정을 박스 제목, 단계, 하위 항목 형태로 출력합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY         ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Repository instances
//!    ├─ label_repository: ✓ Created
//! ✓ Step 1: Creating Repository instances (4 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스 제목 (49칸 중앙 정렬)
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 완료 요약
pub fn print_final_summary(repositories: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repositories);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repositories + services);
    println!();
}

/// inventory 등록 정보를 캐시에 적재한 결과
///
/// `kind`는 `Repository` 또는 `Service` 입니다.
pub fn print_cache_initialized(kind: &str, count: usize) {
    println!("   ├─ {} registrations: {} cached", kind, count);
}
