// Inventory metrics for farm inputs.
use shared::models::StockBatch;

pub fn average_stock(opening_stock: f64, closing_stock: f64) -> f64 {
    (opening_stock + closing_stock) / 2.0
}

/// How many times the average stock was consumed. An empty average stock yields 0.
pub fn stock_turnover(cost_of_goods_sold: f64, average_stock: f64) -> f64 {
    if average_stock == 0.0 {
        return 0.0;
    }
    cost_of_goods_sold / average_stock
}

/// Unit cost averaged over batches, weighted by batch quantity.
///
/// Returns 0 when the total quantity is zero, which includes an empty slice.
pub fn weighted_average_cost(batches: &[StockBatch]) -> f64 {
    let (total_quantity, total_cost) = batches
        .iter()
        .fold((0.0, 0.0), |(quantity, cost), batch| {
            (quantity + batch.quantity, cost + batch.total_cost())
        });

    if total_quantity == 0.0 {
        return 0.0;
    }
    total_cost / total_quantity
}
