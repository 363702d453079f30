use quickpivot::fib::{FibCache, FibMethod};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::time::timeout;

// 每次计算的时间预算
const BUDGET: Duration = Duration::from_secs(2);
const TARGETS: [u64; 6] = [30, 100, 500, 1_000, 100_000, 1_000_000];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("斐波那契各实现的可计算范围");
    println!("==========================");
    println!("时间预算: {:?}", BUDGET);

    let runtime = Runtime::new()?;
    runtime.block_on(async {
        for method in FibMethod::ALL {
            println!("\n[{}]", method);
            for n in TARGETS {
                let start = Instant::now();
                // 计算是CPU密集的同步代码，放到阻塞线程池里才能被超时打断等待
                let task = tokio::task::spawn_blocking(move || method.compute(n));
                match timeout(BUDGET, task).await {
                    Ok(Ok(Ok(value))) => {
                        println!("  F({}) 共 {} 位二进制，耗时 {:?}", n, value.bits(), start.elapsed());
                    }
                    Ok(Ok(Err(err))) => {
                        println!("  F({}) 失败: {}", n, err);
                        break;
                    }
                    Ok(Err(join_err)) => return Err(join_err.into()),
                    Err(_) => {
                        println!("  F({}) 超出时间预算", n);
                        break;
                    }
                }
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    println!("\n[cached, 逐步预热]");
    let mut cache = FibCache::new();
    let target = 5_000;
    match cache.get(target) {
        Ok(_) => println!("  直接计算F({})成功", target),
        Err(err) => println!("  直接计算失败: {}", err),
    }
    let step = cache.recursion_limit();
    let mut n = 0;
    while n < target {
        n = (n + step).min(target);
        cache.get(n)?;
        println!("  已缓存到F({})", n);
    }
    println!("  预热后F({}) 共 {} 位二进制", target, cache.get(target)?.bits());

    // 超时的阻塞任务仍在后台运行，不等待它们结束
    runtime.shutdown_background();
    Ok(())
}
