//! Demo data: the CRM has no backend, every collection is mocked here.

use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use serde_json::{json, Value};

const ROLE_DEFINITIONS: &[&str] = &[
    r#"{"id":"admin","name":"مدیر سیستم","permissions":"view_customers,view_tickets,view_sales,view_inventory,view_invoices,view_finance,manage_purchases"}"#,
    r#"{"id":"sales_manager","name":"مدیر فروش","permissions":"view_customers,view_sales"}"#,
    r#"{"id":"support_agent","name":"کارشناس پشتیبانی","permissions":"view_customers,view_tickets"}"#,
    r#"{"id":"accountant","name":"حسابدار","permissions":"view_invoices,view_finance"}"#,
    r#"{"id":"purchaser","name":"کارشناس خرید","permissions":"manage_purchases,view_inventory"}"#,
    r#"{"id":"intern","name":"کارآموز"}"#,
];

/// Demo roles; definitions that fail to parse are skipped.
pub fn roles() -> Vec<Role> {
    ROLE_DEFINITIONS
        .iter()
        .filter_map(|raw| match Role::from_json(raw) {
            Ok(role) => Some(role),
            Err(e) => {
                log::warn!("skipping role definition: {:#}", e);
                None
            }
        })
        .collect()
}

fn user(id: &str, username: &str, full_name: &str, role_id: Option<&str>, roles: &[Role]) -> UserInfo {
    UserInfo {
        id: id.to_string(),
        username: username.to_string(),
        full_name: Some(full_name.to_string()),
        email: Some(format!("{}@crm.example.ir", username)),
        role: role_id.and_then(|role_id| roles.iter().find(|r| r.id == role_id).cloned()),
    }
}

/// Demo users to switch between; the first one is signed in at start.
pub fn users() -> Vec<UserInfo> {
    let roles = roles();
    vec![
        user("u1", "admin", "مهدی احمدی", Some("admin"), &roles),
        user("u2", "n.karimi", "نرگس کریمی", Some("sales_manager"), &roles),
        user("u3", "a.hosseini", "علی حسینی", Some("support_agent"), &roles),
        user("u4", "m.rahimi", "مریم رحیمی", Some("accountant"), &roles),
        user("u5", "s.moradi", "سعید مرادی", Some("purchaser"), &roles),
        user("u6", "p.azizi", "پریسا عزیزی", Some("intern"), &roles),
        user("u7", "guest", "مهمان", None, &roles),
    ]
}

pub fn customers() -> Vec<Value> {
    vec![
        json!({"id": "C-1001", "name": "سارا محمدی", "email": "sara.mohammadi@example.ir", "phone": "09121112233", "company": "پارس تجارت", "status": "active"}),
        json!({"id": "C-1002", "name": "رضا کریمی", "phone": "09352223344", "status": "active"}),
        json!({"id": "C-1003", "name": "علی رضایی", "email": "ali.rezaei@example.ir", "phone": "09123334455", "company": "فن‌آوران نوین", "status": "prospect"}),
        json!({"id": "C-1004", "name": "زهرا احمدی", "email": "z.ahmadi@example.ir", "phone": "09124445566", "status": "active"}),
        json!({"id": "C-1005", "name": "محمد حسینی", "phone": "09195556677", "company": "صنایع البرز", "status": "inactive"}),
        json!({"id": "C-1006", "name": "فاطمه نوری", "email": "f.noori@example.ir", "phone": "09126667788", "status": "active"}),
        json!({"id": "C-1007", "name": "Sara Mohammadi", "email": "sara@globex.example", "phone": "09127778899", "company": "Globex", "status": "active"}),
        json!({"id": "C-1008", "name": "امیر جعفری", "phone": "09378889900", "status": "prospect"}),
    ]
}

pub fn tickets() -> Vec<Value> {
    vec![
        json!({"id": "T-101", "subject": "مشکل ورود به حساب کاربری", "customerName": "سارا محمدی", "status": "open", "priority": "high"}),
        json!({"id": "T-102", "subject": "درخواست فاکتور رسمی", "customerName": "رضا کریمی", "status": "in_progress", "priority": "medium"}),
        json!({"id": "T-103", "subject": "خطا در همگام‌سازی", "customerName": "علی رضایی", "status": "resolved", "priority": "urgent"}),
        json!({"id": "T-104", "subject": "Login issue", "customerName": "Sara Mohammadi", "status": "open", "priority": "low"}),
        json!({"id": "T-105", "subject": "تغییر آدرس ارسال", "status": "closed", "priority": "low"}),
    ]
}

pub fn leads() -> Vec<Value> {
    vec![
        json!({"id": "L-201", "contactName": "حمید صادقی", "companyName": "آریا سیستم", "status": "new", "estimatedValue": 150000000}),
        json!({"id": "L-202", "contactName": "نازنین یوسفی", "status": "contacted", "estimatedValue": 80000000}),
        json!({"id": "L-203", "contactName": "کاوه مرادی", "companyName": "پارس تجارت", "status": "qualified", "estimatedValue": 320000000}),
        json!({"id": "L-204", "contactName": "Reza Tehrani", "companyName": "Tehran Soft", "status": "lost", "estimatedValue": 45000000}),
        json!({"id": "L-205", "contactName": "لیلا قاسمی", "status": "converted", "estimatedValue": 210000000}),
    ]
}

pub fn tasks() -> Vec<Value> {
    vec![
        json!({"id": "K-301", "title": "تماس پیگیری با سارا محمدی", "status": "todo", "dueDate": "2024-06-10", "assignee": "n.karimi"}),
        json!({"id": "K-302", "title": "ارسال پیش‌فاکتور به آریا سیستم", "status": "in_progress", "dueDate": "2024-06-12"}),
        json!({"id": "K-303", "title": "بررسی تیکت‌های باز", "status": "todo", "assignee": "a.hosseini"}),
        json!({"id": "K-304", "title": "جلسه با تیم فروش", "status": "done", "dueDate": "2024-05-28"}),
        json!({"id": "K-305", "title": "به‌روزرسانی لیست قیمت محصولات", "status": "todo"}),
    ]
}

pub fn products() -> Vec<Value> {
    vec![
        json!({"id": "P-401", "name": "لپ‌تاپ ایسوس", "code": "SKU-LT-001", "price": 450000000, "stock": 12}),
        json!({"id": "P-402", "name": "مانیتور ۲۷ اینچ", "code": "SKU-MN-027", "price": 120000000, "stock": 30}),
        json!({"id": "P-403", "name": "ماوس بی‌سیم", "price": 8500000, "stock": 150}),
        json!({"id": "P-404", "name": "Router AX3000", "code": "SKU-RT-3000", "price": 65000000, "stock": 8}),
        json!({"id": "P-405", "name": "پشتیبانی سالانه نرم‌افزار", "code": "SRV-SUP-12", "price": 95000000}),
    ]
}

pub fn quotes() -> Vec<Value> {
    vec![
        json!({"id": "Q-501", "customerName": "سارا محمدی", "status": "sent", "totalAmount": 570000000, "issueDate": "2024-05-20"}),
        json!({"id": "Q-502", "customerName": "آریا سیستم", "status": "draft", "totalAmount": 150000000}),
        json!({"id": "Q-503", "customerName": "علی رضایی", "status": "accepted", "totalAmount": 95000000, "issueDate": "2024-05-02"}),
    ]
}

pub fn invoices() -> Vec<Value> {
    vec![
        json!({"id": "INV-601", "customerName": "سارا محمدی", "status": "paid", "totalAmount": 570000000, "issueDate": "2024-05-25"}),
        json!({"id": "INV-602", "customerName": "رضا کریمی", "status": "overdue", "totalAmount": 128500000, "issueDate": "2024-04-15"}),
        json!({"id": "INV-603", "customerName": "صنایع البرز", "status": "sent", "totalAmount": 65000000}),
        json!({"id": "INV-604", "customerName": "Globex", "status": "draft", "totalAmount": 8500000}),
    ]
}

pub fn purchase_orders() -> Vec<Value> {
    vec![
        json!({"id": "PO-701", "vendorName": "پخش سراسری تهران", "status": "sent", "totalAmount": 900000000, "issueDate": "2024-05-10"}),
        json!({"id": "PO-702", "vendorName": "نوآوران ارتباطات", "status": "received", "totalAmount": 260000000}),
        json!({"id": "PO-703", "vendorName": "Asus Distribution", "status": "draft", "totalAmount": 1350000000}),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_role_definitions_parse() {
        assert_eq!(roles().len(), ROLE_DEFINITIONS.len());
    }

    #[test]
    fn test_users_resolve_roles() {
        let users = users();
        let admin = &users[0];
        assert!(admin.permissions().is_some_and(|p| p.contains("manage_purchases")));

        let guest = users.iter().find(|u| u.username == "guest").unwrap();
        assert!(guest.role.is_none());

        let intern_role = roles().into_iter().find(|r| r.id == "intern").unwrap();
        assert_eq!(intern_role.permissions.to_csv(), "");
    }
}
