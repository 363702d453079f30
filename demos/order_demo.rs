use ndarray::array;
use quickpivot::{partition, quick_sort, quick_sort_by, select, sort_range};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("quickpivot 划分/排序/选择示例");
    println!("=============================");

    println!("1. 以首元素为枢轴划分整个数组");
    {
        let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
        println!("  划分前: {:?}", a);
        let p = partition(&mut a, 0, 8)?;
        println!("  划分后: {:?}，枢轴{}位于下标{}", a, a[p], p);
    }

    println!("\n2. 只划分区间[1, 7]");
    {
        let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
        let p = partition(&mut a, 1, 7)?;
        println!("  划分后: {:?}，枢轴下标{}", a, p);
    }

    println!("\n3. 快速排序");
    {
        let mut a = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
        println!("  排序后: {:?}", quick_sort(&mut a));

        let mut b = vec![9, 4, 3, 2, 1, 0];
        sort_range(&mut b, 1, 4)?;
        println!("  只排序[1, 4]: {:?}", b);
    }

    println!("\n4. 第k小元素");
    {
        let original = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
        for k in [0, 2, 3] {
            let mut a = original.clone();
            let value = *select(&mut a, k)?;
            println!("  k = {}: {}，选择后数组: {:?}", k, value, a);
        }

        let mut empty: Vec<i32> = Vec::new();
        if let Err(err) = select(&mut empty, 0) {
            println!("  空数组: {} ({:?})", err, err.kind());
        }
    }

    println!("\n5. ndarray列原地排序");
    {
        let mut m = array![[3.5, 30.0], [1.5, 10.0], [2.5, 20.0]];
        quick_sort_by(&mut m.column_mut(0), |x: &f64, y: &f64| x.total_cmp(y));
        println!("  第0列排序后:\n{}", m);
    }

    Ok(())
}
