use uuid::Uuid;

use crate::{
    models::{AddOn, Category, Product},
    store::{Collection, StoreState},
};

const PRODUCTS: [(&str, &str, i64, Category, bool); 10] = [
    ("X-Burger", "Pão, hambúrguer e queijo", 1800, Category::Lanches, true),
    ("X-Salada", "Pão, hambúrguer, queijo, alface e tomate", 2000, Category::Lanches, true),
    ("X-Bacon", "Pão, hambúrguer, queijo e bacon", 2400, Category::Lanches, true),
    ("Misto Quente", "Pão de forma, presunto e queijo", 1200, Category::Lanches, false),
    ("Coca-Cola Lata", "350ml", 600, Category::Bebidas, false),
    ("Suco de Laranja", "Natural, 500ml", 900, Category::Bebidas, false),
    ("Batata Frita", "Porção média", 1500, Category::Acompanhamentos, true),
    ("Onion Rings", "Porção com 10 anéis", 1700, Category::Acompanhamentos, false),
    ("Pudim", "Fatia de pudim de leite", 1000, Category::Sobremesas, false),
    ("Petit Gâteau", "Com sorvete de creme", 1900, Category::Sobremesas, false),
];

const EXTRAS: [(&str, i64); 5] = [
    ("Bacon", 400),
    ("Queijo Cheddar", 300),
    ("Ovo", 250),
    ("Hambúrguer Extra", 700),
    ("Molho Especial", 200),
];

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|(nome, descricao, preco, categoria, permite_extras)| Product {
            id: Uuid::new_v4(),
            nome: (*nome).to_string(),
            descricao: (*descricao).to_string(),
            preco: *preco,
            categoria: *categoria,
            imagem: String::new(),
            permite_extras: *permite_extras,
        })
        .collect()
}

pub fn extras() -> Vec<AddOn> {
    EXTRAS
        .iter()
        .map(|(nome, preco)| AddOn {
            id: Uuid::new_v4(),
            nome: (*nome).to_string(),
            preco: *preco,
            disponivel: true,
        })
        .collect()
}

/// State used when no snapshot exists yet: the catalog and nothing else.
pub fn initial_state() -> StoreState {
    StoreState {
        produtos: Collection::new(products()),
        extras: Collection::new(extras()),
        ..StoreState::default()
    }
}
